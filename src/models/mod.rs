//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod brand;
pub mod email;
pub mod equipment;
pub mod expense;
pub mod trip;
pub mod vehicle;
