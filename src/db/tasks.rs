use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Task, TaskData, TaskStatus};

pub async fn list_tasks(pool: &PgPool) -> Result<Vec<Task>, StoreError> {
    let rows = sqlx::query_as::<_, Task>(
        r#"
        SELECT *
        FROM tasks
        ORDER BY
            CASE status WHEN 'in_progress' THEN 0 WHEN 'todo' THEN 1 ELSE 2 END,
            due_date ASC NULLS LAST,
            created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_task(pool: &PgPool, id: Uuid) -> Result<Option<Task>, StoreError> {
    let row = sqlx::query_as::<_, Task>(r#"SELECT * FROM tasks WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_task(
    pool: &PgPool,
    created_by: Option<Uuid>,
    data: &TaskData,
) -> Result<Task, StoreError> {
    let row = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (title, description, status, priority, assignee_id, created_by, due_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.status)
    .bind(data.priority)
    .bind(data.assignee_id)
    .bind(created_by)
    .bind(data.due_date)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_task(pool: &PgPool, id: Uuid, data: &TaskData) -> Result<Option<Task>, StoreError> {
    let row = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET
            title = $1,
            description = $2,
            status = $3,
            priority = $4,
            assignee_id = $5,
            due_date = $6,
            updated_at = now()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.status)
    .bind(data.priority)
    .bind(data.assignee_id)
    .bind(data.due_date)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn set_task_status(
    pool: &PgPool,
    id: Uuid,
    status: TaskStatus,
) -> Result<Option<Task>, StoreError> {
    let row = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET status = $1, updated_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_task(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM tasks WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
