use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{TeamMember, TeamMemberData};

pub async fn list_team_members(
    pool: &PgPool,
    include_inactive: bool,
) -> Result<Vec<TeamMember>, StoreError> {
    let rows = if include_inactive {
        sqlx::query_as::<_, TeamMember>(
            r#"SELECT * FROM team_members ORDER BY sort_order ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT *
            FROM team_members
            WHERE is_active
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?
    };

    Ok(rows)
}

pub async fn get_team_member(pool: &PgPool, id: Uuid) -> Result<Option<TeamMember>, StoreError> {
    let row = sqlx::query_as::<_, TeamMember>(r#"SELECT * FROM team_members WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_team_member(
    pool: &PgPool,
    data: &TeamMemberData,
) -> Result<TeamMember, StoreError> {
    let row = sqlx::query_as::<_, TeamMember>(
        r#"
        INSERT INTO team_members (
            name_en, name_ar, position_en, position_ar, bio_en, bio_ar,
            photo_url, email, linkedin_url, sort_order, is_active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&data.name_en)
    .bind(&data.name_ar)
    .bind(&data.position_en)
    .bind(&data.position_ar)
    .bind(&data.bio_en)
    .bind(&data.bio_ar)
    .bind(data.photo_url.as_deref())
    .bind(data.email.as_deref())
    .bind(data.linkedin_url.as_deref())
    .bind(data.sort_order)
    .bind(data.is_active)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_team_member(
    pool: &PgPool,
    id: Uuid,
    data: &TeamMemberData,
) -> Result<Option<TeamMember>, StoreError> {
    let row = sqlx::query_as::<_, TeamMember>(
        r#"
        UPDATE team_members
        SET
            name_en = $1,
            name_ar = $2,
            position_en = $3,
            position_ar = $4,
            bio_en = $5,
            bio_ar = $6,
            photo_url = $7,
            email = $8,
            linkedin_url = $9,
            sort_order = $10,
            is_active = $11,
            updated_at = now()
        WHERE id = $12
        RETURNING *
        "#,
    )
    .bind(&data.name_en)
    .bind(&data.name_ar)
    .bind(&data.position_en)
    .bind(&data.position_ar)
    .bind(&data.bio_en)
    .bind(&data.bio_ar)
    .bind(data.photo_url.as_deref())
    .bind(data.email.as_deref())
    .bind(data.linkedin_url.as_deref())
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_team_member(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM team_members WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
