//! Allele function assignments per gene (CPIC allele functionality tables,
//! restricted to the alleles this pipeline recognizes).

use prx_core::models::{AlleleFunction, Gene};

use AlleleFunction::{Increased, NoFunction, Normal, Reduced};

const CYP2D6: &[(&str, AlleleFunction)] = &[
    ("*1", Normal),
    ("*2", Normal),
    ("*4", NoFunction),
    ("*10", Reduced),
];

const CYP2C19: &[(&str, AlleleFunction)] = &[
    ("*1", Normal),
    ("*2", NoFunction),
    ("*3", NoFunction),
    ("*17", Increased),
];

const CYP2C9: &[(&str, AlleleFunction)] = &[("*1", Normal), ("*2", Reduced), ("*3", Reduced)];

const SLCO1B1: &[(&str, AlleleFunction)] = &[("*1", Normal), ("*5", Reduced), ("*15", Reduced)];

const TPMT: &[(&str, AlleleFunction)] = &[("*1", Normal), ("*3A", NoFunction), ("*3C", NoFunction)];

const DPYD: &[(&str, AlleleFunction)] = &[("*1", Normal), ("*2A", NoFunction)];

///
/// The full allele → function table of a gene.
///
pub fn allele_table(gene: Gene) -> &'static [(&'static str, AlleleFunction)] {
    match gene {
        Gene::Cyp2d6 => CYP2D6,
        Gene::Cyp2c19 => CYP2C19,
        Gene::Cyp2c9 => CYP2C9,
        Gene::Slco1b1 => SLCO1B1,
        Gene::Tpmt => TPMT,
        Gene::Dpyd => DPYD,
    }
}

///
/// Function of one star allele. Alleles missing from the gene's table are `Unknown`.
///
pub fn allele_function(gene: Gene, allele: &str) -> AlleleFunction {
    allele_table(gene)
        .iter()
        .find(|(name, _)| *name == allele)
        .map(|(_, function)| *function)
        .unwrap_or(AlleleFunction::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Gene::Cyp2d6, "*4", NoFunction)]
    #[case(Gene::Cyp2d6, "*10", Reduced)]
    #[case(Gene::Cyp2c19, "*17", Increased)]
    #[case(Gene::Cyp2c9, "*3", Reduced)]
    #[case(Gene::Slco1b1, "*15", Reduced)]
    #[case(Gene::Tpmt, "*3C", NoFunction)]
    #[case(Gene::Dpyd, "*2A", NoFunction)]
    fn test_known_alleles(#[case] gene: Gene, #[case] allele: &str, #[case] expected: AlleleFunction) {
        assert_eq!(allele_function(gene, allele), expected);
    }

    #[rstest]
    #[case(Gene::Cyp2d6, "*17")]
    #[case(Gene::Tpmt, "*3a")]
    #[case(Gene::Dpyd, "")]
    fn test_unmapped_alleles_are_unknown(#[case] gene: Gene, #[case] allele: &str) {
        assert_eq!(allele_function(gene, allele), AlleleFunction::Unknown);
    }

    #[rstest]
    fn test_every_gene_has_normal_reference() {
        for gene in Gene::ALL {
            assert_eq!(allele_function(gene, "*1"), Normal, "{}", gene);
            assert!(allele_table(gene).len() <= 4);
        }
    }
}
