#[cfg(feature = "core")]
#[doc(inline)]
pub use prx_core as core;

#[cfg(feature = "vcf")]
#[doc(inline)]
pub use prx_vcf as vcf;

#[cfg(feature = "phenotype")]
#[doc(inline)]
pub use prx_phenotype as phenotype;

#[cfg(feature = "risk")]
#[doc(inline)]
pub use prx_risk as risk;

#[cfg(feature = "report")]
#[doc(inline)]
pub use prx_report as report;
