//! Brand Onboarding Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態遷移

pub mod types;
pub mod error;
pub mod state;
pub mod response;
pub mod render;
pub mod template;
pub mod upload;

pub use types::{FileHandle, OutcomeKind, RowOutcome};
pub use error::{ErrorKind, UploadError};
pub use state::{PlaceholderContent, Tab, Theme, UploadPhase, ViewState};
pub use response::{interpret_response, parse_row_outcomes, server_error_message, transport_error};
pub use render::{result_rows, OutcomeSummary, ResultRow, RowStatus};
pub use template::{TEMPLATE_CONTENT_TYPE, TEMPLATE_CSV, TEMPLATE_FILE_NAME};
pub use upload::{is_csv_file_name, upload_url, UPLOAD_FIELD, UPLOAD_PATH};
