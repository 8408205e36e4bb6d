//!
//! # Domain Store
//!
//! CRUD operations over users, tasks, and task assignments, consolidated into
//! one place so route handlers stay thin request/response mappings. Each
//! function is one transaction: single statements rely on the database's
//! per-statement atomicity, and the multi-step assignment path runs inside an
//! explicit transaction so its existence checks and insert cannot interleave
//! with a concurrent delete.

pub mod assignments;
pub mod tasks;
pub mod users;
