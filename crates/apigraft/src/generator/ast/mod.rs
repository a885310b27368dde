pub(crate) mod documentation;
pub(crate) mod method;
pub(crate) mod path_template;

pub(crate) use documentation::Documentation;
pub(crate) use method::{MethodDef, ParamDef, ParamKind, ParamLocation, ReturnKind, UnionDef};
pub(crate) use path_template::PathTemplate;
