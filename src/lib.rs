pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod state;

use sqlx::{sqlite::Sqlite, Pool};

pub type DbPool = Pool<Sqlite>;
