//! Chain Catalog Code Generation
//!
//! Turns the loaded chain registry into two equivalent source units: a Zig
//! file with static chain data and a TypeScript module exposing the same
//! catalog. Both are rendered from one [`codegen::shared::catalog::Catalog`],
//! which fixes order and identifiers before either emitter runs.

pub mod cmds;
pub mod codegen;
