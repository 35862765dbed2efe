//! PokeAPI client

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::{CreatureRecord, CreatureStat};

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ApiResource {
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStatSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    moves: Vec<PokemonMoveSlot>,
    sprites: serde_json::Value,
    species: ApiResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonMoveSlot {
    #[serde(rename = "move")]
    move_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonSpeciesResponse {
    evolution_chain: Option<ApiResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct EvolutionChainResponse {
    chain: ChainLink,
}

#[derive(Clone, Debug, Deserialize)]
struct ChainLink {
    species: NamedResource,
    evolves_to: Vec<ChainLink>,
}

/// Thin wrapper over reqwest bound to one API base
#[derive(Clone, Debug)]
pub struct PokeApi {
    base: String,
    catalog_limit: u32,
    http: reqwest::Client,
}

impl PokeApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base().to_string(),
            catalog_limit: config.catalog_limit,
            http: reqwest::Client::new(),
        }
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base, self.catalog_limit)
    }

    pub fn creature_url(&self, name_or_id: &str) -> String {
        let key = name_or_id.trim().to_lowercase();
        format!("{}/pokemon/{}", self.base, urlencoding::encode(&key))
    }

    pub async fn fetch_catalog(&self) -> Result<Vec<String>, ApiError> {
        let bytes = self.fetch_bytes(&self.catalog_url()).await?;
        decode_catalog(&bytes)
    }

    pub async fn fetch_creature(&self, name_or_id: &str) -> Result<CreatureRecord, ApiError> {
        let bytes = self.fetch_bytes(&self.creature_url(name_or_id)).await?;
        decode_creature(&bytes)
    }

    /// Species record first, then the evolution chain it points at.
    pub async fn fetch_evolution_chain(&self, species_url: &str) -> Result<Vec<String>, ApiError> {
        let species = self.fetch_bytes(species_url).await?;
        let chain_url = decode_species(&species)?;
        let chain = self.fetch_bytes(&chain_url).await?;
        decode_evolution_chain(&chain)
    }

    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), url.to_string()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<String>, ApiError> {
    let response: ListResponse = decode(bytes)?;
    Ok(response
        .results
        .into_iter()
        .map(|entry| entry.name)
        .collect())
}

pub fn decode_creature(bytes: &[u8]) -> Result<CreatureRecord, ApiError> {
    let response: PokemonResponse = decode(bytes)?;

    let types = response
        .types
        .into_iter()
        .map(|slot| slot.type_info.name)
        .collect();
    let stats = response
        .stats
        .into_iter()
        .map(|slot| CreatureStat {
            name: slot.stat.name,
            value: slot.base_stat,
        })
        .collect();
    let abilities = response
        .abilities
        .into_iter()
        .map(|slot| slot.ability.name)
        .collect();
    let moves = response
        .moves
        .into_iter()
        .map(|slot| slot.move_info.name)
        .collect();

    Ok(CreatureRecord {
        id: response.id,
        name: response.name,
        height: response.height,
        weight: response.weight,
        types,
        abilities,
        stats,
        sprite_url: pointer_string(&response.sprites, "/front_default"),
        species_url: response.species.url,
        moves,
    })
}

/// Evolution-chain URL from a species record.
pub fn decode_species(bytes: &[u8]) -> Result<String, ApiError> {
    let response: PokemonSpeciesResponse = decode(bytes)?;
    response
        .evolution_chain
        .map(|chain| chain.url)
        .ok_or_else(|| ApiError::Decode("species has no evolution chain".to_string()))
}

pub fn decode_evolution_chain(bytes: &[u8]) -> Result<Vec<String>, ApiError> {
    let response: EvolutionChainResponse = decode(bytes)?;
    Ok(first_branch(&response.chain))
}

/// Species names along the first `evolves_to` entry at every level.
fn first_branch(chain: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = Some(chain);
    while let Some(link) = current {
        names.push(link.species.name.clone());
        current = link.evolves_to.first();
    }
    names
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
