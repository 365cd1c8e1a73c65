pub mod common;
pub mod config;
pub mod db;
pub mod i18n;
pub mod models;
pub mod services;
pub mod storage;
pub mod web;
