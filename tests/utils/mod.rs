#![cfg(feature = "test-utils")]
#![allow(dead_code, unused_imports)]

pub mod event;
pub mod guild;
pub mod mock_context;
