use std::fmt::{self, Display};

use serde::{Deserialize, Serialize, Serializer};

use crate::models::gene::Gene;

///
/// One qualifying line of a variant file: a call annotated with a target gene
/// and, optionally, the star allele it tags.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct VariantRecord {
    #[serde(serialize_with = "serialize_rsid")]
    pub rsid: String,
    pub gene: Gene,
    pub star_allele: Option<String>,
    pub chromosome: String,
    pub position: String,
}

impl VariantRecord {
    pub const RSID_PLACEHOLDER: &'static str = "N/A";

    ///
    /// Identifier to show for this record, falling back to `N/A` when the ID
    /// column carried nothing.
    ///
    pub fn display_rsid(&self) -> &str {
        if self.rsid.is_empty() {
            Self::RSID_PLACEHOLDER
        } else {
            &self.rsid
        }
    }

    ///
    /// Tab separated line: chromosome, position, id, gene, star allele (`.` if absent)
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.chromosome,
            self.position,
            self.display_rsid(),
            self.gene,
            self.star_allele.as_deref().unwrap_or(".")
        )
    }
}

fn serialize_rsid<S: Serializer>(rsid: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if rsid.is_empty() {
        serializer.serialize_str(VariantRecord::RSID_PLACEHOLDER)
    } else {
        serializer.serialize_str(rsid)
    }
}

impl Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_as_string_marks_missing_star() {
        let record = VariantRecord {
            rsid: "rs3892097".to_string(),
            gene: Gene::Cyp2d6,
            star_allele: None,
            chromosome: "22".to_string(),
            position: "42524947".to_string(),
        };
        assert_eq!(record.as_string(), "22\t42524947\trs3892097\tCYP2D6\t.");
    }

    #[rstest]
    fn test_empty_rsid_uses_placeholder() {
        let record = VariantRecord {
            rsid: String::new(),
            gene: Gene::Tpmt,
            star_allele: Some("*3A".to_string()),
            chromosome: "6".to_string(),
            position: "18130918".to_string(),
        };
        assert_eq!(record.display_rsid(), "N/A");
        assert_eq!(record.to_string(), "6\t18130918\tN/A\tTPMT\t*3A");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rsid"], "N/A");
    }

    #[rstest]
    fn test_json_keeps_present_rsid() {
        let record = VariantRecord {
            rsid: "rs4244285".to_string(),
            gene: Gene::Cyp2c19,
            star_allele: Some("*2".to_string()),
            chromosome: "10".to_string(),
            position: "94781859".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rsid"], "rs4244285");
        assert_eq!(json["star_allele"], "*2");
    }
}
