mod support;
mod walker;
