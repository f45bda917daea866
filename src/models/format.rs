#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatDirection {
    Input,
    Output,
}

/// 轉換引擎回報的格式能力清單
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatListing {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

impl FormatListing {
    pub fn formats(&self, direction: FormatDirection) -> &[String] {
        match direction {
            FormatDirection::Input => &self.input,
            FormatDirection::Output => &self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_by_direction() {
        let listing = FormatListing {
            input: vec!["markdown".to_string()],
            output: vec!["html".to_string(), "docx".to_string()],
        };
        assert_eq!(listing.formats(FormatDirection::Input), ["markdown"]);
        assert_eq!(listing.formats(FormatDirection::Output), ["html", "docx"]);
    }
}
