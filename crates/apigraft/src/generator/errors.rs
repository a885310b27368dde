use strum::Display;

/// Fatal defects in the API description or the skeleton. Any one of these
/// aborts the run before a single byte of output is written.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerateError {
  #[strum(to_string = "response {status} of {method} {path} declares content without a schema reference")]
  MissingSchemaRef {
    path: String,
    method: String,
    status: String,
  },
  #[strum(to_string = "response {status} of {method} {path} references an unresolvable component")]
  UnresolvedReference {
    path: String,
    method: String,
    status: String,
  },
  #[strum(to_string = "parameter '{parameter}' of operation '{operation}' has unsupported schema type '{schema_type}'")]
  UnsupportedSchemaType {
    operation: String,
    parameter: String,
    schema_type: String,
  },
  #[strum(to_string = "parameter '{parameter}' of operation '{operation}' has unsupported location '{location}'")]
  UnsupportedParameterLocation {
    operation: String,
    parameter: String,
    location: String,
  },
  #[strum(to_string = "boolean parameter '{parameter}' of operation '{operation}' cannot be carried in the query string")]
  BooleanQueryParameter { operation: String, parameter: String },
  #[strum(to_string = "operation '{operation}' declares parameter '{parameter}' more than once")]
  DuplicateParameter { operation: String, parameter: String },
  #[strum(to_string = "parameter '{parameter}' of operation '{operation}' has no usable identifier")]
  InvalidParameterName { operation: String, parameter: String },
  #[strum(to_string = "path '{path}' has placeholder '{{{placeholder}}}' with no declared path parameter")]
  UndeclaredPlaceholder { path: String, placeholder: String },
  #[strum(to_string = "{method} {path} has no operationId")]
  MissingOperationId { path: String, method: String },
  #[strum(to_string = "operation '{operation}' does not map to a usable method identifier")]
  InvalidOperationId { operation: String },
  #[strum(to_string = "operation '{operation}' collides with an earlier operation on method '{method}'")]
  DuplicateOperationId { operation: String, method: String },
  #[strum(to_string = "schema name '{name}' does not map to a usable type identifier")]
  InvalidSchemaName { name: String },
  #[strum(to_string = "description declares no servers, so no default endpoint exists")]
  MissingDefaultEndpoint,
  #[strum(to_string = "skeleton has no struct to augment")]
  MissingClientStruct,
  #[strum(to_string = "skeleton struct '{name}' has no inherent impl block")]
  MissingClientImpl { name: String },
  #[strum(to_string = "skeleton struct '{name}' has no 'transport' field")]
  MissingTransportField { name: String },
  #[strum(to_string = "skeleton impl has no API_VERSION constant to replace")]
  MissingVersionConst,
  #[strum(to_string = "skeleton is not valid Rust: {message}")]
  SkeletonParse { message: String },
  #[strum(to_string = "synthesized code failed to parse: {message}")]
  Render { message: String },
}

impl std::error::Error for GenerateError {}
