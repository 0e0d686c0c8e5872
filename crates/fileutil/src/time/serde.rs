//! Serde adapters that store timestamps in the string encoding of this module.

/// (De)serializes an `Option<Zoned>` as a single string, `-` standing in for `None`.
///
/// ```
/// use jiff::Zoned;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Status {
///     #[serde(with = "fileutil::time::serde::optional")]
///     finished_at: Option<Zoned>,
/// }
/// ```
pub mod optional {
    use ::serde::de::Error;
    use ::serde::{Deserialize, Deserializer, Serializer};
    use jiff::Zoned;

    use crate::time::{format_time, parse_time};

    pub fn serialize<S: Serializer>(value: &Option<Zoned>, se: S) -> Result<S::Ok, S::Error> {
        se.serialize_str(&format_time(value.as_ref()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Zoned>, D::Error> {
        let value = String::deserialize(de)?;
        parse_time(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use ::serde::{Deserialize, Serialize};
    use jiff::Zoned;
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    #[derive(Debug, Serialize, Deserialize)]
    struct Record {
        name: String,
        #[serde(with = "crate::time::serde::optional")]
        started_at: Option<Zoned>,
    }

    #[test]
    fn serialize_set_and_unset() {
        let started = date(2022, 2, 1)
            .at(2, 2, 2, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();

        let record = Record {
            name: "a".to_string(),
            started_at: Some(started),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"a","started_at":"2022-02-01T02:02:02Z"}"#);

        let record = Record {
            name: "b".to_string(),
            started_at: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"b","started_at":"-"}"#);
    }

    #[test]
    fn deserialize_all_encodings() {
        let record: Record =
            serde_json::from_str(r#"{"name":"a","started_at":"2022-02-01T02:02:02Z"}"#).unwrap();
        let started = record.started_at.unwrap();
        assert_eq!(started.datetime(), date(2022, 2, 1).at(2, 2, 2, 0));

        let record: Record = serde_json::from_str(r#"{"name":"b","started_at":"-"}"#).unwrap();
        assert!(record.started_at.is_none());

        let record: Record =
            serde_json::from_str(r#"{"name":"c","started_at":"2022-02-01 02:02:02"}"#).unwrap();
        let started = record.started_at.unwrap();
        assert_eq!(started.datetime(), date(2022, 2, 1).at(2, 2, 2, 0));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        let result = serde_json::from_str::<Record>(r#"{"name":"a","started_at":"yesterday"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'yesterday'"));
    }
}
