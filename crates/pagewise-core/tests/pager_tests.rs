mod common;

use common::{create_test_players, player_line};
use pagewise_core::{
    Colour, Fragment, PageCommand, Pager, PagerBuilder, PagerConfig, PagerError, Sink,
};

/// Sink that only counts deliveries by kind.
#[derive(Default)]
struct CountingSink {
    documents: usize,
    errors: usize,
}

impl Sink for CountingSink {
    fn deliver(&mut self, _document: Fragment) {
        self.documents += 1;
    }

    fn deliver_error(&mut self, _message: &str) {
        self.errors += 1;
    }
}

#[test]
fn test_navigation_round_trip() {
    let players = create_test_players(45);
    let pager = PagerBuilder::new("/players")
        .with_header(Some("Players"))
        .with_page_size(10)
        .build(&players, player_line)
        .expect("Failed to build pager");
    assert_eq!(pager.total_pages(), 5);

    // Follow "next" from page 1 to the end, dispatching each click the way a
    // command layer would.
    let mut page = 1;
    let mut visited = vec![page];
    loop {
        let document = pager.page(page).expect("Page should exist");
        let next = document
            .runs()
            .into_iter()
            .find(|run| run.text == " > ")
            .and_then(|run| run.style.click)
            .map(|action| action.command().parse::<PageCommand>().unwrap());

        match next {
            Some(request) => {
                assert!(request.matches("/players"));
                page = request.page;
                visited.push(page);
            }
            None => break,
        }
    }
    assert_eq!(visited, [1, 2, 3, 4, 5]);
}

#[test]
fn test_transformer_clicks_kept_alongside_navigation() {
    let players = create_test_players(12);
    let pager = Pager::new("/players", None, &players, player_line).unwrap();

    let commands: Vec<String> = pager
        .render_page(2)
        .click_actions()
        .into_iter()
        .map(|action| action.command().to_string())
        .collect();
    assert_eq!(
        commands,
        ["/whois player11", "/whois player12", "/players 1", "/players 1"]
    );
}

#[test]
fn test_every_page_has_same_footer_width() {
    let players = create_test_players(250);
    let pager = PagerBuilder::new("/players")
        .with_page_size(2)
        .build(&players, player_line)
        .unwrap();
    assert_eq!(pager.total_pages(), 125);

    let footer_width = |page: usize| {
        let text = pager.render_page(page).plain_text();
        text.lines().last().unwrap().chars().count()
    };
    let expected = footer_width(1);
    for page in 2..=125 {
        assert_eq!(footer_width(page), expected, "page {page}");
    }
}

#[test]
fn test_send_page_counts() {
    let players = create_test_players(3);
    let pager = Pager::new("/players", None, &players, player_line).unwrap();

    let mut sink = CountingSink::default();
    pager.send_page(1, &mut sink);
    pager.send_page(2, &mut sink);
    pager.send_page(0, &mut sink);
    assert_eq!(sink.documents, 1);
    assert_eq!(sink.errors, 2);
}

#[test]
fn test_send_page_through_trait_object() {
    let players = create_test_players(3);
    let pager = Pager::new("/players", None, &players, player_line).unwrap();

    let mut collected: Vec<Fragment> = Vec::new();
    let sink: &mut dyn Sink = &mut collected;
    pager.send_page(9, sink);
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].runs()[0].style.colour, Some(Colour::Error));
}

#[test]
fn test_config_driven_pager() {
    let config =
        PagerConfig::from_json(r#"{ "page_size": 4, "header": "Online", "command": "/online" }"#)
            .unwrap();
    let players = create_test_players(9);
    let pager = PagerBuilder::new("ignored")
        .with_config(&config)
        .build(&players, player_line)
        .unwrap();

    assert_eq!(pager.command(), "/online");
    assert_eq!(pager.total_pages(), 3);
    let first_line = pager.render_page(1).plain_text();
    assert!(first_line.lines().next().unwrap().contains("[Online]"));
}

#[test]
fn test_invalid_construction() {
    let players = create_test_players(1);
    let result = PagerBuilder::new("/players")
        .with_page_size(0)
        .build(&players, player_line);
    assert!(matches!(result, Err(PagerError::InvalidInput { .. })));
}
