use async_trait::async_trait;
use rail_domain::ReferenceGenerator;
use serde::Deserialize;
use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::app_config::BusinessRules;

const SEQUENTIAL_WIDTH: usize = 8;

/// Which reference generator the service runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStrategy {
    #[default]
    Uuid,
    Sequential,
}

/// A random v4 UUID as 32 upper-case hex characters
pub struct UuidReferenceGenerator;

#[async_trait]
impl ReferenceGenerator for UuidReferenceGenerator {
    async fn generate(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        Ok(Uuid::new_v4().simple().to_string().to_uppercase())
    }
}

/// Zero-padded counter: 00000000, 00000001, ...
///
/// Restarts from its configured start value, so after a restart that value
/// must be moved past the references already handed out.
pub struct SequentialReferenceGenerator {
    next: AtomicU64,
}

impl SequentialReferenceGenerator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialReferenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferenceGenerator for SequentialReferenceGenerator {
    async fn generate(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        let value = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{:0width$}", value, width = SEQUENTIAL_WIDTH))
    }
}

pub fn build_reference_generator(rules: &BusinessRules) -> Arc<dyn ReferenceGenerator> {
    match rules.reference_strategy {
        ReferenceStrategy::Uuid => Arc::new(UuidReferenceGenerator),
        ReferenceStrategy::Sequential => {
            Arc::new(SequentialReferenceGenerator::starting_at(rules.reference_start))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_uuid_reference_format() {
        let generator = UuidReferenceGenerator;

        let first = generator.generate().await.unwrap();
        let second = generator.generate().await.unwrap();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_uuid_references_do_not_repeat() {
        let generator = UuidReferenceGenerator;
        let mut seen = HashSet::new();

        for _ in 0..100_000 {
            assert!(seen.insert(generator.generate().await.unwrap()));
        }
    }

    #[tokio::test]
    async fn test_sequential_references() {
        let generator = SequentialReferenceGenerator::new();

        assert_eq!(generator.generate().await.unwrap(), "00000000");
        assert_eq!(generator.generate().await.unwrap(), "00000001");

        let generator = SequentialReferenceGenerator::starting_at(75_000);
        assert_eq!(generator.generate().await.unwrap(), "00075000");
    }

    #[tokio::test]
    async fn test_build_from_business_rules() {
        let mut rules = BusinessRules {
            reference_strategy: ReferenceStrategy::Sequential,
            ..BusinessRules::default()
        };
        let generator = build_reference_generator(&rules);
        assert_eq!(generator.generate().await.unwrap(), "00000000");

        rules.reference_start = 1_200;
        let generator = build_reference_generator(&rules);
        assert_eq!(generator.generate().await.unwrap(), "00001200");
        assert_eq!(generator.generate().await.unwrap(), "00001201");

        rules.reference_strategy = ReferenceStrategy::Uuid;
        let generator = build_reference_generator(&rules);
        assert_eq!(generator.generate().await.unwrap().len(), 32);
    }
}
