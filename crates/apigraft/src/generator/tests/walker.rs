use serde_json::json;

use super::support::{parse_spec, spec_with_paths};
use crate::generator::{errors::GenerateError, walker::SpecWalker};

#[test]
fn operations_follow_path_then_method_order() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/b": {
      "post": { "operationId": "postB", "responses": {} },
      "get": { "operationId": "getB", "responses": {} }
    },
    "/a": {
      "get": { "operationId": "getA", "responses": {} }
    }
  })));
  let walker = SpecWalker::new(&spec);
  let ids: Vec<String> = walker
    .operations()
    .iter()
    .map(|(_, _, operation)| operation.operation_id.clone().unwrap())
    .collect();
  assert_eq!(ids, ["getA", "getB", "postB"]);
}

#[test]
fn response_table_excludes_nothing_and_keeps_descriptions() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/a": {
      "get": {
        "operationId": "getA",
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Alpha" } }
            }
          },
          "400": {
            "description": "bad",
            "content": {
              "application/problem+json": {
                "schema": { "$ref": "#/components/schemas/HttpProblem" }
              }
            }
          }
        }
      }
    }
  })));
  let walker = SpecWalker::new(&spec);
  let operations = walker.operations();
  let (path, method, operation) = &operations[0];
  let table = walker.response_table(path, method, operation).unwrap();

  assert_eq!(table.len(), 2);
  assert_eq!(table[0].status, "200");
  assert_eq!(table[0].content_type, "application/json");
  assert_eq!(table[0].type_name, "Alpha");
  assert_eq!(table[0].description.as_deref(), Some("ok"));
  assert_eq!(table[1].type_name, "HttpProblem");
}

#[test]
fn return_types_deduplicate_and_exclude_the_problem_type() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/a": {
      "get": {
        "operationId": "getA",
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Alpha" } }
            }
          },
          "202": {
            "description": "later",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Beta" } }
            }
          },
          "206": {
            "description": "dup",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Alpha" } }
            }
          },
          "400": {
            "description": "bad",
            "content": {
              "application/problem+json": {
                "schema": { "$ref": "#/components/schemas/HttpProblem" }
              }
            }
          }
        }
      }
    }
  })));
  let walker = SpecWalker::new(&spec);
  let operations = walker.operations();
  let (path, method, operation) = &operations[0];
  let table = walker.response_table(path, method, operation).unwrap();

  assert_eq!(SpecWalker::return_types(&table), ["Alpha", "Beta"]);
  assert_eq!(
    SpecWalker::accept_types(&table),
    ["application/json", "application/problem+json"]
  );
}

#[test]
fn inline_schemas_are_fatal() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/a": {
      "get": {
        "operationId": "getA",
        "responses": {
          "200": {
            "description": "ok",
            "content": { "application/json": { "schema": { "type": "object" } } }
          }
        }
      }
    }
  })));
  let walker = SpecWalker::new(&spec);
  let operations = walker.operations();
  let (path, method, operation) = &operations[0];
  let err = walker.response_table(path, method, operation).unwrap_err();
  assert_eq!(
    err,
    GenerateError::MissingSchemaRef {
      path: String::from("/a"),
      method: String::from("GET"),
      status: String::from("200"),
    }
  );
}

#[test]
fn content_without_a_schema_is_fatal() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/a": {
      "get": {
        "operationId": "getA",
        "responses": {
          "200": { "description": "ok", "content": { "application/json": {} } }
        }
      }
    }
  })));
  let walker = SpecWalker::new(&spec);
  let operations = walker.operations();
  let (path, method, operation) = &operations[0];
  let err = walker.response_table(path, method, operation).unwrap_err();
  assert!(matches!(err, GenerateError::MissingSchemaRef { .. }), "{err}");
}

#[test]
fn foreign_reference_roots_are_fatal() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/a": {
      "get": {
        "operationId": "getA",
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/definitions/Old" } }
            }
          }
        }
      }
    }
  })));
  let walker = SpecWalker::new(&spec);
  let operations = walker.operations();
  let (path, method, operation) = &operations[0];
  let err = walker.response_table(path, method, operation).unwrap_err();
  assert!(matches!(err, GenerateError::MissingSchemaRef { .. }), "{err}");
}

#[test]
fn all_return_types_union_across_operations_in_order() {
  let spec = parse_spec(&spec_with_paths(json!({
    "/a": {
      "get": {
        "operationId": "getA",
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Alpha" } }
            }
          }
        }
      }
    },
    "/b": {
      "get": {
        "operationId": "getB",
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Beta" } }
            }
          },
          "202": {
            "description": "also",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Alpha" } }
            }
          }
        }
      }
    }
  })));
  let walker = SpecWalker::new(&spec);
  assert_eq!(walker.all_return_types().unwrap(), ["Alpha", "Beta"]);
}

#[test]
fn descriptions_without_paths_have_no_operations() {
  let spec = parse_spec(
    &json!({
      "openapi": "3.0.0",
      "info": { "title": "Test API", "version": "9.9.9" }
    })
    .to_string(),
  );
  assert!(SpecWalker::new(&spec).operations().is_empty());
}
