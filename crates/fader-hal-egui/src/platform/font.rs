//! Font files registered as named egui font families.

use std::{fmt, fs, io, path::Path, sync::Arc};

use egui::{FontData, FontDefinitions, FontFamily, FontId};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FontError {
    NotFound,
    Unreadable(io::ErrorKind),
    Empty,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("font file not found"),
            Self::Unreadable(kind) => write!(f, "font file unreadable: {kind}"),
            Self::Empty => f.write_str("font file is empty"),
        }
    }
}

/// A loaded face and the egui family it is drawn with.
#[derive(Clone, Debug)]
pub struct FontHandle {
    name: String,
    family: FontFamily,
    data: Option<Arc<FontData>>,
}

/// Reads the font at `path` for use under the family name `family`.
pub fn load_font(path: &Path, family: &str) -> Result<FontHandle, FontError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FontError::NotFound,
        kind => FontError::Unreadable(kind),
    })?;
    if bytes.is_empty() {
        return Err(FontError::Empty);
    }

    Ok(FontHandle {
        name: family.to_owned(),
        family: FontFamily::Name(family.into()),
        data: Some(Arc::new(FontData::from_owned(bytes))),
    })
}

impl FontHandle {
    /// egui's built-in proportional face.
    pub fn fallback() -> Self {
        Self {
            name: String::from("default"),
            family: FontFamily::Proportional,
            data: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    pub fn is_fallback(&self) -> bool {
        self.data.is_none()
    }

    pub fn font_id(&self, size: f32) -> FontId {
        FontId::new(size, self.family.clone())
    }

    /// egui defaults plus this face as its own family. The default
    /// proportional faces stay behind it for glyphs it lacks.
    pub fn definitions(&self) -> FontDefinitions {
        let mut definitions = FontDefinitions::default();
        let Some(data) = &self.data else {
            return definitions;
        };

        definitions
            .font_data
            .insert(self.name.clone(), Arc::clone(data));

        let mut chain = vec![self.name.clone()];
        if let Some(defaults) = definitions.families.get(&FontFamily::Proportional) {
            chain.extend(defaults.iter().cloned());
        }
        definitions.families.insert(self.family.clone(), chain);
        definitions
    }

    pub fn install(&self, ctx: &egui::Context) {
        ctx.set_fonts(self.definitions());
    }
}
