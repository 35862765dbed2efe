//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full name catalog
    LoadCatalog,
    /// Fetch one creature by lowercased name or numeric id
    LoadCreature { query: String },
    /// Follow species -> evolution chain for the displayed creature
    LoadEvolution { creature_id: u32, species_url: String },
    /// Download and decode the front sprite
    LoadSprite { creature_id: u32, url: String },
}
