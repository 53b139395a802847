// Crate-internal.
// ---

pub(crate) mod standard_views {
    pub(crate) mod customs_overview;
    pub(crate) mod descriptive_insights;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_views {
        pub use crate::impl_ext::standard_views::customs_overview::*;
        pub use crate::impl_ext::standard_views::descriptive_insights::*;
    }
}
