pub mod category;
pub mod loaders;
pub mod question;

pub use category::{category_map, Category, CategoryMap};
pub use loaders::{load_seed_file, SeedData};
pub use question::{NewQuestion, Question};

pub type QuestionId = u64;
pub type CategoryId = u64;

/// 反序列化 id：同时接受整数和数字字符串（前端会把分类 id 作为字符串发送）
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a numeric string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value)
                .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// 反序列化 id 列表，每个元素的规则同 `deserialize_id`
pub fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Id(#[serde(deserialize_with = "deserialize_id")] u64);

    let ids = Vec::<Id>::deserialize(deserializer)?;
    Ok(ids.into_iter().map(|Id(id)| id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Ids {
        #[serde(deserialize_with = "deserialize_id_list")]
        ids: Vec<u64>,
    }

    #[test]
    fn test_id_list_accepts_numbers_and_strings() {
        let parsed: Ids = serde_json::from_str(r#"{"ids": ["3", 4, " 12 "]}"#).unwrap();
        assert_eq!(parsed.ids, vec![3, 4, 12]);

        let empty: Ids = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert!(empty.ids.is_empty());
    }

    #[test]
    fn test_id_list_rejects_bad_entries() {
        for body in [r#"{"ids": ["x"]}"#, r#"{"ids": [-1]}"#, r#"{"ids": "3"}"#] {
            assert!(serde_json::from_str::<Ids>(body).is_err(), "body={body}");
        }
    }
}
