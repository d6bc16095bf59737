use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use trickdex::dictionary::{WordDictionary, WordKind};
use trickdex::list::TrickList;
use trickdex::spot::GeneralSpot;
use trickdex::trick::Trick;

pub fn print_resolved_words(dict: &WordDictionary, tokens: &[String]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Token").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Before%"),
        Cell::new("After%"),
        Cell::new("Whole"),
        Cell::new("Kind"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for token in tokens {
        match dict.lookup(token) {
            Some(def) => {
                let kind = def.kind.map(|k| k.to_string()).unwrap_or_default();
                table.add_row(vec![
                    Cell::new(token).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:.1}", def.points)),
                    Cell::new(format!("{:.2}", def.percentage_before)),
                    Cell::new(format!("{:.2}", def.percentage_after)),
                    Cell::new(if def.apply_to_whole { "yes" } else { "" }),
                    Cell::new(kind),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(token).fg(Color::Red),
                    Cell::new("?").fg(Color::Red),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
        }
    }
    println!("\n{}", table);
}

pub fn print_trick_breakdown(trick: &Trick) {
    println!("\nTrick: {}", trick.name());

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Part").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Points").fg(Color::Cyan),
        Cell::new("Before%"),
        Cell::new("After%"),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for part in trick.parts() {
        let label = if part.is_block() { "Block" } else { "Word" };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(part.tokens().join(" ")).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", part.points())).fg(Color::Cyan),
            Cell::new(format!("{:.2}", part.percentage_before())),
            Cell::new(format!("{:.2}", part.percentage_after())),
        ]);
    }
    println!("{}", table);

    let bonus = GeneralSpot::max_percentage(trick.landings());
    let spots: Vec<String> = trick
        .landings()
        .iter()
        .map(|l| l.spot.to_string())
        .collect();

    println!("\nSpots: {} (bonus {:.0}%)", spots.join(", "), bonus * 100.0);
    println!("Default Points: {:.1}", trick.default_points());
    println!("Final Points:   {:.1}", trick.points());
    println!("Difficulty:     {}", trick.difficulty());
}

pub fn print_session(list: &TrickList) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Trick").add_attribute(Attribute::Bold),
        Cell::new("Date"),
        Cell::new("Spots"),
        Cell::new("Points").fg(Color::Cyan),
        Cell::new("Difficulty"),
        Cell::new("Pin"),
    ]);

    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (idx, trick) in list.iter().enumerate() {
        let date = trick
            .date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let spots: Vec<String> = trick
            .landings()
            .iter()
            .map(|l| l.spot.to_string())
            .collect();
        let pin = if list.pinned().contains(&idx) {
            "📌"
        } else {
            ""
        };

        table.add_row(vec![
            Cell::new(idx),
            Cell::new(trick.name()).add_attribute(Attribute::Bold),
            Cell::new(date),
            Cell::new(spots.join(", ")),
            Cell::new(format!("{:.1}", trick.points())).fg(Color::Cyan),
            Cell::new(trick.difficulty()),
            Cell::new(pin),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_top_five(list: &TrickList) {
    let top = list.top_five_by_points();

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Top").add_attribute(Attribute::Bold),
        Cell::new("#"),
        Cell::new("Trick"),
        Cell::new("Points").fg(Color::Green),
    ]);

    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (pos, (idx, points)) in top.iter().enumerate() {
        let name = list.get(*idx).map(Trick::name).unwrap_or("?");
        table.add_row(vec![
            Cell::new(pos + 1),
            Cell::new(idx),
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", points)).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);

    let top_total: f64 = top.iter().map(|(_, p)| p).sum();

    println!("\n=== 🏆 RIDER RANK ===");
    println!("Top-five points: {:.1}", top_total);
    println!("Total points:    {:.1}", list.total_points());
    println!("Rank: {}", list.user_rank());
}

pub fn print_words(dict: &WordDictionary, kind: Option<WordKind>) {
    let mut defs: Vec<_> = dict
        .definitions()
        .filter(|d| kind.is_none() || d.kind == kind)
        .collect();
    defs.sort_by(|a, b| a.word.cmp(&b.word));

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Points").fg(Color::Cyan),
        Cell::new("Before%"),
        Cell::new("After%"),
        Cell::new("Flags"),
        Cell::new("Kind"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for def in &defs {
        let mut flags = Vec::new();
        if def.connect {
            flags.push("connect");
        }
        if def.apply_to_whole {
            flags.push("whole");
        }
        let kind_str = def.kind.map(|k| k.to_string()).unwrap_or_default();

        table.add_row(vec![
            Cell::new(&def.word).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", def.points)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", def.percentage_before)),
            Cell::new(format!("{:.2}", def.percentage_after)),
            Cell::new(flags.join(", ")),
            Cell::new(kind_str),
        ]);
    }
    println!("\n{}", table);
    println!("{} words", defs.len());
}
