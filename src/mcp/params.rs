/// Generates a typed parameter struct along with its JSON schema and the
/// extraction from raw tool arguments. Optional parameters become `Option`s;
/// empty strings count as absent.
#[macro_export]
macro_rules! tool_params {
    (
        $struct_name:ident
        $(, required($name:ident: $type:ident, $desc:expr))*
        $(, optional($opt_name:ident: $opt_type:ident, $opt_desc:expr))*
        $(,)?
    ) => {
        #[derive(Debug, Clone)]
        pub struct $struct_name {
            $(pub $name: $crate::tool_params!(@rust_type $type),)*
            $(pub $opt_name: Option<$crate::tool_params!(@rust_type $opt_type)>,)*
        }

        impl $crate::mcp::ToolParams for $struct_name {
            fn input_schema() -> serde_json::Value {
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        $(
                            stringify!($name): {
                                "type": $crate::tool_params!(@json_type $type),
                                "description": $desc
                            },
                        )*
                        $(
                            stringify!($opt_name): {
                                "type": $crate::tool_params!(@json_type $opt_type),
                                "description": $opt_desc
                            },
                        )*
                    },
                    "required": [$(stringify!($name)),*]
                })
            }

            #[allow(unused_variables)]
            fn extract_params(arguments: &serde_json::Value) -> anyhow::Result<Self> {
                Ok(Self {
                    $(
                        $name: $crate::tool_params!(@extract_required $type, arguments, stringify!($name))?,
                    )*
                    $(
                        $opt_name: $crate::tool_params!(@extract_optional $opt_type, arguments, stringify!($opt_name)),
                    )*
                })
            }
        }
    };

    // Type mappings
    (@json_type string) => { "string" };
    (@json_type number) => { "number" };

    (@rust_type string) => { String };
    (@rust_type number) => { serde_json::Number };

    // Extraction
    (@extract_required string, $args:expr, $name:expr) => {
        $args
            .get($name)
            .and_then(|v| v.as_str())
            .map(|s| s.to_owned())
            .ok_or_else(|| $crate::error::Error::MissingParameter($name.to_owned()))
    };

    (@extract_optional string, $args:expr, $name:expr) => {
        $args
            .get($name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_owned())
    };
    (@extract_optional number, $args:expr, $name:expr) => {
        $args.get($name).and_then(|v| match v {
            serde_json::Value::Number(n) => Some(n.clone()),
            _ => None,
        })
    };
}
