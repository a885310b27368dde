pub(crate) mod assembler;
pub(crate) mod ast;
pub(crate) mod errors;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod synthesizer;
pub(crate) mod walker;

#[cfg(test)]
mod tests;
