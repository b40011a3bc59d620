use pagewise_core::{Colour, Fragment, Style};

/// A player row as a server listing command would show it.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub online: bool,
}

/// Helper function to create `count` numbered test players
pub fn create_test_players(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|n| Player {
            name: format!("player{n:02}"),
            online: n % 3 == 0,
        })
        .collect()
}

/// Transformer used by the integration tests.
pub fn player_line(player: &Player) -> Fragment {
    let status = if player.online {
        Fragment::text(" (online)").coloured(Colour::Heading)
    } else {
        Fragment::text(" (offline)").coloured(Colour::Disabled)
    };

    Fragment::text(player.name.clone())
        .styled(Style::coloured(Colour::Command).with_click(format!("/whois {}", player.name)))
        .append(status)
}
