use super::{lookup_str, NOT_AVAILABLE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resolved metadata for one accession.
///
/// Every field is always populated; anything the upstream omits is
/// [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The identifier as supplied by the caller
    pub accession: String,

    /// Taken from the entry's `primaryAccession`
    pub gene_name: String,

    /// `proteinDescription.recommendedName.fullName.value`
    pub protein_name: String,

    /// `organism.scientificName`
    pub species: String,
}

impl Record {
    /// Translate a UniProtKB JSON entry into a record.
    ///
    /// `accession` is echoed verbatim; it is not re-read from the body.
    pub fn from_entry(accession: &str, entry: &Value) -> Self {
        Self {
            accession: accession.to_string(),
            gene_name: lookup_str(entry, &["primaryAccession"], NOT_AVAILABLE),
            protein_name: lookup_str(
                entry,
                &["proteinDescription", "recommendedName", "fullName", "value"],
                NOT_AVAILABLE,
            ),
            species: lookup_str(entry, &["organism", "scientificName"], NOT_AVAILABLE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn full_entry() -> Value {
        json!({
            "primaryAccession": "P69905",
            "uniProtkbId": "HBA_HUMAN",
            "proteinDescription": {
                "recommendedName": {
                    "fullName": { "value": "Hemoglobin subunit alpha" }
                }
            },
            "organism": {
                "scientificName": "Homo sapiens",
                "commonName": "Human",
                "taxonId": 9606
            }
        })
    }

    #[test]
    fn test_from_entry_all_fields() {
        let record = Record::from_entry("P69905", &full_entry());
        assert_eq!(
            record,
            Record {
                accession: "P69905".to_string(),
                gene_name: "P69905".to_string(),
                protein_name: "Hemoglobin subunit alpha".to_string(),
                species: "Homo sapiens".to_string(),
            }
        );
    }

    #[test]
    fn test_accession_not_taken_from_body() {
        let record = Record::from_entry("hba_human", &full_entry());
        assert_eq!(record.accession, "hba_human");
        assert_eq!(record.gene_name, "P69905");
    }

    #[test]
    fn test_missing_species() {
        let mut entry = full_entry();
        entry["organism"].as_object_mut().unwrap().remove("scientificName");
        let record = Record::from_entry("P69905", &entry);
        assert_eq!(record.species, NOT_AVAILABLE);
        assert_eq!(record.protein_name, "Hemoglobin subunit alpha");
    }

    #[test]
    fn test_submitted_name_only() {
        // TrEMBL entries carry submissionNames instead of a recommendedName
        let entry = json!({
            "primaryAccession": "A0A024R161",
            "proteinDescription": {
                "submissionNames": [{ "fullName": { "value": "Guanine nucleotide-binding protein" } }]
            },
            "organism": { "scientificName": "Homo sapiens" }
        });
        let record = Record::from_entry("A0A024R161", &entry);
        assert_eq!(record.protein_name, NOT_AVAILABLE);
    }

    #[test]
    fn test_non_object_body() {
        let record = Record::from_entry("X", &json!([1, 2, 3]));
        assert_eq!(record.gene_name, NOT_AVAILABLE);
        assert_eq!(record.protein_name, NOT_AVAILABLE);
        assert_eq!(record.species, NOT_AVAILABLE);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&Record::from_entry("P69905", &full_entry())).unwrap();
        assert!(json.contains("\"geneName\":\"P69905\""));
        assert!(json.contains("\"proteinName\":\"Hemoglobin subunit alpha\""));
    }

    proptest! {
        #[test]
        fn prop_accession_echoed_verbatim(accession in ".*") {
            let record = Record::from_entry(&accession, &full_entry());
            prop_assert_eq!(record.accession, accession);
        }

        #[test]
        fn prop_dropping_any_field_yields_sentinel(drop in 0usize..3) {
            let mut entry = full_entry();
            let obj = entry.as_object_mut().unwrap();
            match drop {
                0 => { obj.remove("primaryAccession"); }
                1 => { obj.remove("proteinDescription"); }
                _ => { obj.remove("organism"); }
            }
            let record = Record::from_entry("P69905", &entry);
            let fields = [&record.gene_name, &record.protein_name, &record.species];
            prop_assert_eq!(fields[drop].as_str(), NOT_AVAILABLE);
            prop_assert_eq!(fields.iter().filter(|f| f.as_str() == NOT_AVAILABLE).count(), 1);
        }
    }
}
