pub mod report;
pub mod upload;

pub use report::{ErrorResponse, ExportFormat, ExportRequest, MatchRecord, MatchReport, MatchResponse};
pub use upload::{ArchiveFile, FileCandidate, UploadInput, ARCHIVE_SUFFIX};
