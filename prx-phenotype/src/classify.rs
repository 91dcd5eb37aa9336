use prx_core::errors::ModelResult;
use prx_core::models::{AlleleFunction, Diplotype, Gene, Phenotype};

use crate::tables::allele_function;

///
/// Classify a pair of allele functions. Rules are tried in order and the first
/// match wins:
///
/// 1. both no function → PM
/// 2. one no function → IM (even if the other allele is increased)
/// 3. any increased → UM
/// 4. any reduced → IM
/// 5. otherwise → NM, which includes unknown alleles
///
pub fn classify_functions(functions: [AlleleFunction; 2]) -> Phenotype {
    let has = |wanted: AlleleFunction| functions.contains(&wanted);

    if functions.iter().all(|f| *f == AlleleFunction::NoFunction) {
        Phenotype::Poor
    } else if has(AlleleFunction::NoFunction) {
        Phenotype::Intermediate
    } else if has(AlleleFunction::Increased) {
        Phenotype::UltraRapid
    } else if has(AlleleFunction::Reduced) {
        Phenotype::Intermediate
    } else {
        Phenotype::Normal
    }
}

///
/// Metabolizer phenotype of a diplotype for the given gene.
///
pub fn classify_phenotype(gene: Gene, diplotype: &Diplotype) -> Phenotype {
    let [first, second] = diplotype.alleles();
    classify_functions([allele_function(gene, first), allele_function(gene, second)])
}

///
/// Same as [`classify_phenotype`], starting from a `first/second` string.
///
pub fn classify_diplotype_str(gene: Gene, diplotype: &str) -> ModelResult<Phenotype> {
    let diplotype: Diplotype = diplotype.parse()?;
    Ok(classify_phenotype(gene, &diplotype))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use AlleleFunction::{Increased, NoFunction, Normal, Reduced, Unknown};

    #[rstest]
    #[case([NoFunction, NoFunction], Phenotype::Poor)]
    #[case([NoFunction, Normal], Phenotype::Intermediate)]
    #[case([NoFunction, Increased], Phenotype::Intermediate)]
    #[case([Reduced, NoFunction], Phenotype::Intermediate)]
    #[case([Increased, Normal], Phenotype::UltraRapid)]
    #[case([Reduced, Increased], Phenotype::UltraRapid)]
    #[case([Reduced, Reduced], Phenotype::Intermediate)]
    #[case([Normal, Normal], Phenotype::Normal)]
    #[case([Unknown, Unknown], Phenotype::Normal)]
    #[case([Unknown, Normal], Phenotype::Normal)]
    fn test_precedence(#[case] functions: [AlleleFunction; 2], #[case] expected: Phenotype) {
        assert_eq!(classify_functions(functions), expected);
    }

    #[rstest]
    #[case(Gene::Cyp2d6, "*4/*1", Phenotype::Intermediate)]
    #[case(Gene::Cyp2d6, "*4/*4", Phenotype::Poor)]
    #[case(Gene::Cyp2d6, "*1/*1", Phenotype::Normal)]
    #[case(Gene::Cyp2d6, "*10/*2", Phenotype::Intermediate)]
    #[case(Gene::Cyp2c19, "*17/*1", Phenotype::UltraRapid)]
    #[case(Gene::Cyp2c19, "*2/*17", Phenotype::Intermediate)]
    #[case(Gene::Cyp2c19, "*2/*3", Phenotype::Poor)]
    #[case(Gene::Tpmt, "*3A/*3C", Phenotype::Poor)]
    #[case(Gene::Dpyd, "*2A/*1", Phenotype::Intermediate)]
    #[case(Gene::Slco1b1, "*5/*15", Phenotype::Intermediate)]
    fn test_classify_diplotypes(#[case] gene: Gene, #[case] diplotype: &str, #[case] expected: Phenotype) {
        assert_eq!(classify_diplotype_str(gene, diplotype), Ok(expected));
    }

    #[rstest]
    fn test_malformed_diplotype_string_is_error() {
        assert!(classify_diplotype_str(Gene::Cyp2d6, "*4").is_err());
    }
}
