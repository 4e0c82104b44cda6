use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::{Frontend, FrontendError, GameRecord};

/// Spaces per nesting level in the written document.
const INDENT: usize = 4;

/// ES-DE (EmulationStation Desktop Edition) frontend.
///
/// Writes the classic `gamelist.xml` layout: a `<gameList>` root holding one
/// `<game>` per ROM with the children `path`, `name`, optional `image`, then
/// the empty scraper slots `releasedate`, `developer`, `publisher`, `genre`
/// and `desc`, always in that order.
pub struct EsDeFrontend;

impl EsDeFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsDeFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for EsDeFrontend {
    fn name(&self) -> &'static str {
        "ES-DE"
    }

    fn default_file_name(&self) -> &'static str {
        "gamelist.xml"
    }

    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, FrontendError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(FrontendError::xml)?;
        writer
            .write_event(Event::Start(BytesStart::new("gameList")))
            .map_err(FrontendError::xml)?;

        for game in games {
            write_game(&mut writer, game)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("gameList")))
            .map_err(FrontendError::xml)?;

        let mut xml = writer.into_inner();
        xml.push(b'\n');
        Ok(xml)
    }
}

fn write_game<W: Write>(writer: &mut Writer<W>, game: &GameRecord) -> Result<(), FrontendError> {
    writer
        .write_event(Event::Start(BytesStart::new("game")))
        .map_err(FrontendError::xml)?;

    write_tag(writer, "path", &game.path)?;
    write_tag(writer, "name", &game.name)?;
    if let Some(ref image) = game.image {
        write_tag(writer, "image", image)?;
    }
    write_tag(writer, "releasedate", &game.release_date)?;
    write_tag(writer, "developer", &game.developer)?;
    write_tag(writer, "publisher", &game.publisher)?;
    write_tag(writer, "genre", &game.genre)?;
    write_tag(writer, "desc", &game.description)?;

    writer
        .write_event(Event::End(BytesEnd::new("game")))
        .map_err(FrontendError::xml)?;
    Ok(())
}

/// Write `<tag>value</tag>`, or `<tag/>` when the value is empty.
fn write_tag<W: Write>(writer: &mut Writer<W>, tag: &str, value: &str) -> Result<(), FrontendError> {
    let element = writer.create_element(tag);
    if value.is_empty() {
        element.write_empty().map_err(FrontendError::xml)?;
    } else {
        element
            .write_text_content(BytesText::new(value))
            .map_err(FrontendError::xml)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/esde_tests.rs"]
mod tests;
