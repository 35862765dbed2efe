//! Display formatting for a loaded creature record

use crate::state::{CreatureRecord, CreatureStat};

pub const EVOLUTION_SEPARATOR: &str = " -> ";
pub const TOP_MOVES: usize = 10;

/// Headroom added above the tallest stat bar.
pub const STAT_CHART_HEADROOM: u64 = 20;

/// Upper-case a letter when it does not follow another letter, lower-case
/// it otherwise (`mr-mime` -> `Mr-Mime`).
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut after_letter = false;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

/// Name, id, size, types and abilities, one per line.
pub fn attribute_lines(record: &CreatureRecord) -> Vec<String> {
    vec![
        format!("Name: {}", title_case(&record.name)),
        format!("ID: {}", record.id),
        format!("Height: {}", record.height),
        format!("Weight: {}", record.weight),
        format!("Types: {}", record.types.join(", ")),
        format!("Abilities: {}", record.abilities.join(", ")),
    ]
}

pub fn evolution_line(chain: &[String]) -> String {
    let names: Vec<String> = chain.iter().map(|name| title_case(name)).collect();
    format!("Evolution Chain: {}", names.join(EVOLUTION_SEPARATOR))
}

pub fn top_moves(record: &CreatureRecord) -> &[String] {
    &record.moves[..record.moves.len().min(TOP_MOVES)]
}

pub fn moves_line(record: &CreatureRecord) -> String {
    format!("Moves (Top 10): {}", top_moves(record).join(", "))
}

/// Full text for the attribute panel. The evolution and moves lines only
/// appear once the evolution chain has loaded.
pub fn detail_lines(record: &CreatureRecord, evolution: Option<&[String]>) -> Vec<String> {
    let mut lines = attribute_lines(record);
    if let Some(chain) = evolution {
        lines.push(String::new());
        lines.push(evolution_line(chain));
        lines.push(moves_line(record));
    }
    lines
}

pub fn stat_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SPA".to_string(),
        "special-defense" => "SPD".to_string(),
        "speed" => "SPE".to_string(),
        _ => name.to_ascii_uppercase(),
    }
}

/// (label, value) pairs for the bar chart, in record order.
pub fn stat_bars(stats: &[CreatureStat]) -> Vec<(String, u64)> {
    stats
        .iter()
        .map(|stat| (stat_label(&stat.name), u64::from(stat.value)))
        .collect()
}

pub fn stat_chart_max(stats: &[CreatureStat]) -> u64 {
    stats
        .iter()
        .map(|stat| u64::from(stat.value))
        .max()
        .unwrap_or(0)
        + STAT_CHART_HEADROOM
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pikachu() -> CreatureRecord {
        CreatureRecord {
            id: 25,
            name: "pikachu".into(),
            height: 4,
            weight: 60,
            types: vec!["electric".into()],
            abilities: vec!["static".into(), "lightning-rod".into()],
            stats: vec![
                CreatureStat {
                    name: "hp".into(),
                    value: 35,
                },
                CreatureStat {
                    name: "speed".into(),
                    value: 90,
                },
            ],
            sprite_url: None,
            species_url: "https://pokeapi.co/api/v2/pokemon-species/25/".into(),
            moves: (1..=12).map(|n| format!("move-{n}")).collect(),
        }
    }

    #[test]
    fn title_case_follows_letter_runs() {
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("mr-mime"), "Mr-Mime");
        assert_eq!(title_case("porygon-z"), "Porygon-Z");
        assert_eq!(title_case("porygon2"), "Porygon2");
        assert_eq!(title_case("HO-OH"), "Ho-Oh");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn attribute_block() {
        assert_eq!(
            attribute_lines(&pikachu()),
            vec![
                "Name: Pikachu",
                "ID: 25",
                "Height: 4",
                "Weight: 60",
                "Types: electric",
                "Abilities: static, lightning-rod",
            ]
        );
    }

    #[test]
    fn evolution_chain_joins_with_arrows() {
        let chain = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(evolution_line(&chain), "Evolution Chain: A -> B -> C");
    }

    #[test]
    fn moves_are_capped_at_ten() {
        let record = pikachu();
        assert_eq!(top_moves(&record).len(), 10);
        assert!(moves_line(&record).ends_with("move-9, move-10"));
    }

    #[test]
    fn detail_lines_omit_follow_up_without_chain() {
        let record = pikachu();
        assert_eq!(detail_lines(&record, None).len(), 6);

        let chain = vec!["pichu".to_string(), "pikachu".to_string()];
        let lines = detail_lines(&record, Some(&chain));
        assert_eq!(lines[7], "Evolution Chain: Pichu -> Pikachu");
        assert!(lines[8].starts_with("Moves (Top 10): move-1"));
    }

    #[test]
    fn stat_chart_scaling() {
        let record = pikachu();
        assert_eq!(
            stat_bars(&record.stats),
            vec![("HP".to_string(), 35), ("SPE".to_string(), 90)]
        );
        assert_eq!(stat_chart_max(&record.stats), 110);
        assert_eq!(stat_chart_max(&[]), STAT_CHART_HEADROOM);
    }
}
