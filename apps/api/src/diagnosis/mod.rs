//! Diagnosis module — the request pipeline from collected form fields to
//! generated diagnosis text: data model → prompt assembly → completion call.

pub mod assembler;
pub mod handlers;
pub mod models;
pub mod prompts;
