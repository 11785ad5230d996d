//! Partner records, tiers and their layout policy.

use anyhow::{Result, bail};
use std::collections::HashSet;

use crate::components::icons::Icon;
use crate::logo::LogoRef;

/// Partner category determining visual prominence on the page.
///
/// Variants are declared in display order: sponsors first, supporters last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Major sponsors, largest visual weight
    Mantenedor,
    /// Partners, medium visual weight
    Parceiro,
    /// Supporters, smallest visual weight
    Apoio,
}

/// Layout parameters for a tier section and its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLayout {
    /// Section heading text
    pub heading: &'static str,
    /// Heading modifier class controlling size and weight
    pub heading_class: &'static str,
    /// Icon shown before the heading
    pub icon: Icon,
    /// Icon size in pixels
    pub icon_size: u32,
    /// Modifier class added to every card of the tier
    pub card_class: &'static str,
    /// Modifier class of the responsive grid
    pub grid_class: &'static str,
    /// Grid column counts at base, small and large breakpoints
    pub columns: [u8; 3],
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Tier; 3] = [Tier::Mantenedor, Tier::Parceiro, Tier::Apoio];

    /// Returns the layout policy for this tier.
    pub fn layout(self) -> TierLayout {
        match self {
            Tier::Mantenedor => TierLayout {
                heading: "Mantenedores",
                heading_class: "tier-heading--mantenedor",
                icon: Icon::HeartHandshake,
                icon_size: 28,
                card_class: "partner-card--mantenedor",
                grid_class: "partner-grid--mantenedor",
                columns: [1, 2, 2],
            },
            Tier::Parceiro => TierLayout {
                heading: "Parceiros",
                heading_class: "tier-heading--parceiro",
                icon: Icon::Handshake,
                icon_size: 24,
                card_class: "partner-card--parceiro",
                grid_class: "partner-grid--parceiro",
                columns: [1, 2, 3],
            },
            Tier::Apoio => TierLayout {
                heading: "Rede de Apoio",
                heading_class: "tier-heading--apoio",
                icon: Icon::Users,
                icon_size: 20,
                card_class: "partner-card--apoio",
                grid_class: "partner-grid--apoio",
                columns: [2, 3, 4],
            },
        }
    }

    /// Table name of the tier in data files.
    pub fn key(self) -> &'static str {
        match self {
            Tier::Mantenedor => "mantenedor",
            Tier::Parceiro => "parceiro",
            Tier::Apoio => "apoio",
        }
    }
}

/// A single partner shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerRecord {
    id: u32,
    name: String,
    logo: LogoRef,
}

impl PartnerRecord {
    pub fn new(id: u32, name: impl Into<String>, logo: LogoRef) -> Self {
        Self {
            id,
            name: name.into(),
            logo,
        }
    }

    /// Identifier, unique within the owning collection
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logo(&self) -> &LogoRef {
        &self.logo
    }

    /// Accessible description of the record's logo image.
    pub fn alt_text(&self) -> String {
        format!("Logo {}", self.name)
    }
}

/// Ordered partner records of one tier; order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerCollection {
    records: Vec<PartnerRecord>,
}

impl PartnerCollection {
    /// Builds a collection, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns error if two records share the same id.
    pub fn new(records: Vec<PartnerRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                bail!(
                    "Duplicate partner id {} ({})",
                    record.id,
                    record.name
                );
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PartnerRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartnerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a PartnerCollection {
    type Item = &'a PartnerRecord;
    type IntoIter = std::slice::Iter<'a, PartnerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The three partner collections of the page, one per tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerDirectory {
    mantenedores: PartnerCollection,
    parceiros: PartnerCollection,
    apoio: PartnerCollection,
}

impl PartnerDirectory {
    pub fn new(
        mantenedores: PartnerCollection,
        parceiros: PartnerCollection,
        apoio: PartnerCollection,
    ) -> Self {
        Self {
            mantenedores,
            parceiros,
            apoio,
        }
    }

    /// Returns the collection of the given tier.
    pub fn collection(&self, tier: Tier) -> &PartnerCollection {
        match tier {
            Tier::Mantenedor => &self.mantenedores,
            Tier::Parceiro => &self.parceiros,
            Tier::Apoio => &self.apoio,
        }
    }

    /// Iterates tiers with their collections in display order.
    pub fn tiers(&self) -> impl Iterator<Item = (Tier, &PartnerCollection)> {
        Tier::ALL.into_iter().map(|tier| (tier, self.collection(tier)))
    }

    /// Iterates every record of every tier in display order.
    pub fn records(&self) -> impl Iterator<Item = (Tier, &PartnerRecord)> {
        self.tiers()
            .flat_map(|(tier, collection)| collection.iter().map(move |record| (tier, record)))
    }

    pub fn total(&self) -> usize {
        self.tiers().map(|(_, collection)| collection.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str) -> PartnerRecord {
        PartnerRecord::new(id, name, LogoRef::placeholder(name))
    }

    #[test]
    fn test_tier_layout_is_stable() {
        // Arrange & Act & Assert
        for tier in Tier::ALL {
            assert_eq!(tier.layout(), tier.layout());
        }
    }

    #[test]
    fn test_tier_layout_classes_are_distinct() {
        // Arrange
        let classes: HashSet<&str> = Tier::ALL.iter().map(|t| t.layout().card_class).collect();

        // Assert
        assert_eq!(classes.len(), 3, "Each tier should own its card class");
    }

    #[test]
    fn test_tier_columns() {
        // Arrange & Act & Assert
        assert_eq!(Tier::Mantenedor.layout().columns, [1, 2, 2]);
        assert_eq!(Tier::Parceiro.layout().columns, [1, 2, 3]);
        assert_eq!(Tier::Apoio.layout().columns, [2, 3, 4]);
    }

    #[test]
    fn test_tier_icon_sizes_decrease() {
        // Arrange
        let sizes: Vec<u32> = Tier::ALL.iter().map(|t| t.layout().icon_size).collect();

        // Assert
        assert_eq!(sizes, vec![28, 24, 20]);
    }

    #[test]
    fn test_alt_text() {
        // Arrange
        let record = record(1, "Empresa 1");

        // Act & Assert
        assert_eq!(record.alt_text(), "Logo Empresa 1");
    }

    #[test]
    fn test_collection_rejects_duplicate_ids() {
        // Arrange
        let records = vec![record(1, "A"), record(1, "B")];

        // Act
        let result = PartnerCollection::new(records);

        // Assert
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Duplicate partner id 1"), "got: {}", msg);
    }

    #[test]
    fn test_collection_keeps_order() -> Result<()> {
        // Arrange
        let records = vec![record(3, "C"), record(1, "A"), record(2, "B")];

        // Act
        let collection = PartnerCollection::new(records)?;

        // Assert
        let names: Vec<&str> = collection.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        Ok(())
    }

    #[test]
    fn test_ids_unique_per_collection_only() -> Result<()> {
        // Arrange
        let parceiros = PartnerCollection::new(vec![record(6, "Parceiro 6")])?;
        let apoio = PartnerCollection::new(vec![record(6, "Apoio 6")])?;

        // Act
        let directory = PartnerDirectory::new(PartnerCollection::default(), parceiros, apoio);

        // Assert
        assert_eq!(directory.total(), 2);
        Ok(())
    }

    #[test]
    fn test_directory_records_in_display_order() -> Result<()> {
        // Arrange
        let directory = PartnerDirectory::new(
            PartnerCollection::new(vec![record(1, "M")])?,
            PartnerCollection::new(vec![record(1, "P")])?,
            PartnerCollection::new(vec![record(1, "A")])?,
        );

        // Act
        let order: Vec<(Tier, &str)> = directory.records().map(|(t, r)| (t, r.name())).collect();

        // Assert
        assert_eq!(
            order,
            vec![
                (Tier::Mantenedor, "M"),
                (Tier::Parceiro, "P"),
                (Tier::Apoio, "A")
            ]
        );
        Ok(())
    }
}
