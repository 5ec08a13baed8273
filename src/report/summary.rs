//! Plain-text summaries of skills, statistics and odds

use super::labels::{
    card_type_label, defensive_label, empty_slot_label, player_type_label, position_label, ticket_label, tier_label,
    Locale,
};
use crate::engine::TicketType;
use crate::entities::Player;
use crate::error::SkillChangeError;
use crate::probability::{CardType, ProbabilityModel};
use crate::session::{SimulationStats, SkillChange};
use crate::skills::SkillSlots;

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// One line per slot: "1. Laser Arm Lv.3 [Gold]"
pub fn format_skills(slots: &SkillSlots, locale: Locale) -> String {
    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let text = match slot {
                Some(skill) => format!("{} [{}]", skill, tier_label(skill.tier, locale)),
                None => empty_slot_label(locale).to_string(),
            };
            format!("  {}. {}\n", i + 1, text)
        })
        .collect()
}

/// Before and after columns of a ticket result
pub fn format_change(change: &SkillChange, locale: Locale) -> String {
    let mut out = format!(
        "{} - {}\n",
        position_label(change.position, locale),
        ticket_label(change.ticket, locale)
    );
    out.push_str(" before:\n");
    out.push_str(&format_skills(&change.before, locale));
    out.push_str(" after:\n");
    out.push_str(&format_skills(&change.after, locale));
    out
}

/// Counters with percentages, the level-sum histogram and ticket usage
pub fn format_stats(stats: &SimulationStats, locale: Locale) -> String {
    let mut out = format!("Simulations: {}\n", stats.simulation_count);
    out.push_str(&format!(
        "Legend skills: {} ({})\n",
        stats.legend_count,
        percent(stats.legend_rate())
    ));

    out.push_str("Level sums:\n");
    for (sum, count) in &stats.level_sum_counts {
        out.push_str(&format!("  {}: {} ({})\n", sum, count, percent(stats.level_sum_rate(*sum))));
    }

    out.push_str("Tickets used:\n");
    for (ticket, count) in &stats.ticket_usage {
        out.push_str(&format!("  {}: {}\n", ticket_label(*ticket, locale), count));
    }
    out
}

/// Header line plus skills for a player
pub fn format_player(player: &Player, locale: Locale) -> String {
    let legend = if player.is_legend { " *" } else { "" };
    let fielding = player
        .defensive_position
        .map(|p| format!(" ({})", defensive_label(p)))
        .unwrap_or_default();

    let mut out = format!(
        "{} [{}]{}{}\n",
        position_label(player.position, locale),
        player_type_label(player.player_type, locale),
        fielding,
        legend
    );
    out.push_str(&format_skills(&player.skills, locale));
    out
}

/// Legend odds for both card types and the matching level-sum table
pub fn format_odds(model: &ProbabilityModel, ticket: TicketType, locale: Locale) -> Result<String, SkillChangeError> {
    let mut out = format!("{}\nLegend skill odds:\n", ticket_label(ticket, locale));
    for card in [CardType::Legend, CardType::Other] {
        out.push_str(&format!(
            "  {}: {}\n",
            card_type_label(card, locale),
            percent(model.legend_appearance_probability(ticket, card))
        ));
    }

    let sums = if ticket == TicketType::Premium {
        model.level_sum_distribution_premium()?
    } else {
        model.level_sum_distribution_default()?
    };
    out.push_str("Level sum odds:\n");
    for (sum, p) in sums.iter() {
        out.push_str(&format!("  {}: {}\n", sum, percent(p)));
    }
    Ok(out)
}
