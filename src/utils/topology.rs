/// Describes what lies beyond the edges of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Cells outside the field are permanently dead.
    #[default]
    Clamped,
    /// Bounds of the field are stitched together.
    ///
    /// Only coordinates within one step of the field are wrapped correctly:
    /// anything left of the field maps to the last column and anything right
    /// of it maps to the first one (same for rows).
    Toroidal,
}

impl Topology {
    pub fn from_toroidal_flag(toroidal: bool) -> Self {
        if toroidal {
            Self::Toroidal
        } else {
            Self::Clamped
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamped => write!(f, "clamped"),
            Self::Toroidal => write!(f, "toroidal"),
        }
    }
}
