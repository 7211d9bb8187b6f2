pub use std::{path::PathBuf, sync::Arc};

pub use color_eyre::eyre::{Context, Result};
pub use rctf_core::prelude::*;
pub use tracing::{debug, error, info, warn};
