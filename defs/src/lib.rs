mod errors;
mod invocation;
mod parameters;
mod stack;
mod variable;

pub use errors::{ConfigError, GeneratorError, ParseError};
pub use invocation::{
    InvocationPayload, InvocationRequest, DEFAULT_FUNCTION_NAME, DEFAULT_INVOCATION_TIMEOUT,
    MAX_INVOCATION_TIMEOUT,
};
pub use parameters::{
    GenerationParameters, RawConfig, TimeoutValue, DEFAULT_AUTHOR, DEFAULT_DEST_DIR,
    DEFAULT_PROVIDER, DEFAULT_RELEASE, DEFAULT_STACK_TAGS, DEFAULT_TF_RUNTIME, DEFAULT_TIMEOUT,
};
pub use stack::{GeneratedStack, StackMetadata};
pub use variable::{TargetType, VariableDeclaration, VariableMap};
