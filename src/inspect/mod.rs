// src/inspect/mod.rs
// =============================================================================
// This module talks to the Search Console URL Inspection API.
//
// Submodules:
// - types: request/response shapes and the Verdict enum
// - client: the IndexInspector trait and its HTTP implementation
// =============================================================================

mod client;
mod types;

pub use client::{IndexInspector, SearchConsoleClient, BODY_MARKER, DEFAULT_API_BASE};
pub use types::{InspectionRequest, InspectionResult, Verdict};
