pub mod diplotype;
pub mod gene;
pub mod phenotype;
pub mod variant;

// re-export for cleaner imports
pub use self::diplotype::Diplotype;
pub use self::gene::Gene;
pub use self::phenotype::{AlleleFunction, Phenotype};
pub use self::variant::VariantRecord;
