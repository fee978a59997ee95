/// Errors returned by fiducial selection.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FiducialError {
    #[error("no spots and no explicit reference points")]
    EmptyInput,
    #[error("spot extent {width} x {height} cannot span an affine basis")]
    DegenerateGeometry { width: f64, height: f64 },
}
