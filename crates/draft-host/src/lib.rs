//! Host-side glue for the draft design-to-code compiler.
//!
//! A [`Session`] owns one selection from the design host and a
//! [`SettingsStore`] of user preferences. It resolves the generation config,
//! builds the tag tree, applies component identification, and runs both
//! emitters. Panel events ([`UiEvent`]) update the stored preferences and
//! trigger regeneration.
//!
//! # Example
//!
//! ```
//! use draft_host::{ConfigOverrides, MemoryStore, Session};
//! use draft_core::SceneNode;
//!
//! let mut session = Session::new(MemoryStore::new(), vec![SceneNode::text("Title", "Hello")]).unwrap();
//! let output = session.generate(&ConfigOverrides::new()).unwrap();
//! assert!(output.generated_code_str.contains("<p className={styles.text1}>Hello</p>"));
//! assert!(output.css_string.starts_with(".text1 {"));
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod messages;
pub mod session;
pub mod storage;

pub use components::{
    ComponentIdentifier, ComponentProp, NoopIdentifier, UserComponentIdentifier, UserComponentSetting,
};
pub use config::{ConfigOverrides, GenerateConfig};
pub use error::{HostError, Result};
pub use messages::{GeneratedOutput, HostAction, UiEvent, COPY_SUCCESS_NOTICE};
pub use session::Session;
pub use storage::{JsonFileStore, MemoryStore, SettingsStore};
