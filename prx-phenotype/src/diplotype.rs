use prx_core::models::diplotype::REFERENCE_ALLELE;
use prx_core::models::{Diplotype, Gene, VariantRecord};
use tracing::debug;

///
/// Call a diplotype for `gene` from its star-allele annotations.
///
/// The first two star alleles seen (in input order) form the diplotype, extras
/// are ignored. A single star allele is paired with the reference `*1`, and no
/// star allele at all gives `*1/*1`. This does not phase genotypes, so a true
/// homozygote and a single under-called allele look the same.
///
/// A star annotation that already names several alleles (`STAR=*4/*4`) is
/// split into its components before pairing.
///
pub fn infer_diplotype(variants: &[VariantRecord], gene: Gene) -> Diplotype {
    let mut alleles = variants
        .iter()
        .filter(|v| v.gene == gene)
        .filter_map(|v| v.star_allele.as_deref())
        .flat_map(|star| star.split('/'))
        .filter(|allele| !allele.is_empty());

    let paired = match (alleles.next(), alleles.next()) {
        (Some(first), Some(second)) => Diplotype::new(first, second),
        (Some(first), None) => Diplotype::new(first, REFERENCE_ALLELE),
        _ => Ok(Diplotype::reference()),
    };
    // components come from a split on '/' with empties removed
    let diplotype = paired.unwrap_or_default();

    debug!(%gene, %diplotype, "inferred diplotype");

    diplotype
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(gene: Gene, star: Option<&str>) -> VariantRecord {
        VariantRecord {
            rsid: "rs0".to_string(),
            gene,
            star_allele: star.map(str::to_string),
            chromosome: "1".to_string(),
            position: "1".to_string(),
        }
    }

    #[rstest]
    fn test_no_star_alleles_gives_reference() {
        let variants = vec![record(Gene::Cyp2d6, None), record(Gene::Cyp2c19, Some("*2"))];
        assert_eq!(infer_diplotype(&variants, Gene::Cyp2d6).to_string(), "*1/*1");
        assert_eq!(infer_diplotype(&[], Gene::Tpmt).to_string(), "*1/*1");
    }

    #[rstest]
    fn test_single_star_paired_with_reference() {
        let variants = vec![record(Gene::Cyp2d6, Some("*4"))];
        assert_eq!(infer_diplotype(&variants, Gene::Cyp2d6).to_string(), "*4/*1");
    }

    #[rstest]
    fn test_two_stars_keep_input_order() {
        let variants = vec![
            record(Gene::Cyp2c19, Some("*17")),
            record(Gene::Cyp2c19, None),
            record(Gene::Cyp2c19, Some("*2")),
        ];
        assert_eq!(infer_diplotype(&variants, Gene::Cyp2c19).to_string(), "*17/*2");
    }

    #[rstest]
    fn test_first_two_win_without_dedup() {
        let variants = vec![
            record(Gene::Cyp2d6, Some("*4")),
            record(Gene::Cyp2d6, Some("*4")),
            record(Gene::Cyp2d6, Some("*10")),
        ];
        assert_eq!(infer_diplotype(&variants, Gene::Cyp2d6).to_string(), "*4/*4");
    }

    #[rstest]
    fn test_other_genes_are_ignored() {
        let variants = vec![
            record(Gene::Cyp2c9, Some("*3")),
            record(Gene::Cyp2d6, Some("*10")),
            record(Gene::Cyp2c9, Some("*2")),
        ];
        assert_eq!(infer_diplotype(&variants, Gene::Cyp2d6).to_string(), "*10/*1");
        assert_eq!(infer_diplotype(&variants, Gene::Cyp2c9).to_string(), "*3/*2");
    }

    #[rstest]
    #[case(vec![Some("*4/*4")], "*4/*4")]
    #[case(vec![Some("*4/*10"), Some("*2")], "*4/*10")]
    #[case(vec![Some("*10/"), Some("*4")], "*10/*4")]
    #[case(vec![Some("/")], "*1/*1")]
    fn test_slash_star_values_split_before_pairing(
        #[case] stars: Vec<Option<&str>>,
        #[case] expected: &str,
    ) {
        let variants: Vec<VariantRecord> =
            stars.into_iter().map(|star| record(Gene::Cyp2d6, star)).collect();
        let diplotype = infer_diplotype(&variants, Gene::Cyp2d6);

        assert_eq!(diplotype.to_string(), expected);
        assert_eq!(diplotype.to_string().parse::<Diplotype>().unwrap(), diplotype);
    }
}
