// ============================================================================
// API Module
// JSON request/response surface of the mixture solver
// ============================================================================

pub mod payload;
pub mod router;

pub use payload::{
    ComplexMixPayload, ComponentPayload, ErrorBody, MessageBody, NumericInput, SimpleMixPayload,
};
pub use router::{status_for, ApiResponse, MixApi};
