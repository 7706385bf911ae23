//! Типы, общие для страницы продаж и сервера `/api/producto`.
//!
//! Крейт не зависит от браузера: всё здесь компилируется и тестируется нативно.

pub mod domain;
pub mod shared;
