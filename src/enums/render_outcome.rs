use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /* Image composed and written to the given path */
    Saved(PathBuf),
    /* Query returned no rows - expected outcome, nothing written */
    NoData,
}
