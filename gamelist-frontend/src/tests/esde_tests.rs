use super::*;
use quick_xml::reader::Reader;

/// Parse a rendered game list back into `(tag, text)` pairs per `<game>`.
fn parse_games(xml: &str) -> Vec<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut games = Vec::new();
    let mut current: Option<Vec<(String, String)>> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag.as_str() {
                    "game" => current = Some(Vec::new()),
                    "gameList" => {}
                    _ => field = Some(tag),
                }
            }
            Event::Empty(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if let Some(ref mut game) = current {
                    game.push((tag, String::new()));
                }
            }
            Event::Text(e) => {
                if let (Some(game), Some(tag)) = (current.as_mut(), field.take()) {
                    game.push((tag, e.unescape().unwrap().to_string()));
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"game" {
                    games.extend(current.take());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    games
}

fn tags(game: &[(String, String)]) -> Vec<&str> {
    game.iter().map(|(tag, _)| tag.as_str()).collect()
}

fn render(games: &[GameRecord]) -> String {
    let bytes = EsDeFrontend::new().render(games).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_declaration_and_root() {
    let xml = render(&[GameRecord::new("./a.zip", "a")]);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<gameList>"));
    assert!(xml.trim_end().ends_with("</gameList>"));
}

#[test]
fn test_indented_with_four_spaces() {
    let xml = render(&[GameRecord::new("./a.zip", "a")]);
    assert!(xml.lines().any(|l| l == "    <game>"));
    assert!(xml.lines().any(|l| l == "        <path>./a.zip</path>"));
    assert!(xml.lines().any(|l| l == "        <name>a</name>"));
}

#[test]
fn test_field_order_with_image() {
    let xml = render(&[GameRecord::new("./a.zip", "a").with_image("./a.png")]);
    let games = parse_games(&xml);
    assert_eq!(games.len(), 1);
    assert_eq!(
        tags(&games[0]),
        vec![
            "path",
            "name",
            "image",
            "releasedate",
            "developer",
            "publisher",
            "genre",
            "desc"
        ]
    );
    assert_eq!(games[0][2].1, "./a.png");
}

#[test]
fn test_image_omitted_when_absent() {
    let xml = render(&[GameRecord::new("./b.zip", "b")]);
    let games = parse_games(&xml);
    assert!(!tags(&games[0]).contains(&"image"));
    assert!(!xml.contains("<image"));
}

#[test]
fn test_metadata_fields_empty() {
    let xml = render(&[GameRecord::new("./b.zip", "b")]);
    let games = parse_games(&xml);
    for (tag, text) in &games[0][2..] {
        assert!(text.is_empty(), "{tag} should be empty");
    }
}

#[test]
fn test_round_trip_preserves_order_and_text() {
    let records = vec![
        GameRecord::new("./sub/Tom & Jerry.zip", "Tom & Jerry").with_image("./images/Tom & Jerry.png"),
        GameRecord::new("./b <beta>.zip", "b <beta>"),
        GameRecord::new("./Pokémon.gb", "Pokémon"),
    ];
    let games = parse_games(&render(&records));
    assert_eq!(games.len(), records.len());

    for (game, record) in games.iter().zip(&records) {
        let field = |name: &str| {
            game.iter()
                .find(|(tag, _)| tag == name)
                .map(|(_, text)| text.clone())
        };
        assert_eq!(field("path").as_deref(), Some(record.path.as_str()));
        assert_eq!(field("name").as_deref(), Some(record.name.as_str()));
        assert_eq!(field("image"), record.image);
    }
}

#[test]
fn test_special_characters_escaped() {
    let xml = render(&[GameRecord::new("./Tom & Jerry.zip", "Tom & Jerry")]);
    assert!(xml.contains("<name>Tom &amp; Jerry</name>"));
}

#[test]
fn test_empty_list_still_has_root() {
    let xml = render(&[]);
    assert!(parse_games(&xml).is_empty());
    assert!(xml.contains("gameList"));
}

#[test]
fn test_write_metadata_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gamelist.xml");

    EsDeFrontend::new()
        .write_metadata(&[GameRecord::new("./a.zip", "a")], &output)
        .unwrap();

    let xml = std::fs::read_to_string(&output).unwrap();
    assert_eq!(parse_games(&xml).len(), 1);
    assert!(!dir.path().join("gamelist.xml.tmp").exists());
}

#[test]
fn test_frontend_identity() {
    let frontend = EsDeFrontend::new();
    assert_eq!(frontend.name(), "ES-DE");
    assert_eq!(frontend.default_file_name(), "gamelist.xml");
}
