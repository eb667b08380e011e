/// The community's list of categories, one per line.
pub const CATEGORY_LIST: &str = "PROJECT Skins
Animal Companions
Champs in a Band
Blue
Assassins
Armored Champs
Bandle City
Enchanters
Star Guardian Skins
Void
Exposed Bell
Ixtal
Hat/Headwear
Mecha Skins
Demacia
Mages
One-Eyed Champs
Global Ultimates
Matching Skin Lines
Bruisers
Champs with Ultimate Skin
Ranged
Freljord
Tanks
Darkin
Yordle
5 Randoms
Noxus
Short Kings/Queens (Short-statured Champions)
Fire and Ice (Champions with fire or ice abilities)
AD Only
Top 5 Mastery
First Letter of Last Name
One-Trick Champions
Champs with Worlds Team Skins
Duelists
Shurima
Old Random
Artists
Hard CC Masters
Odyssey Skins
Weapon Wielders
RNG (Randomized Picks)
Flying Champs
Wombo Combo
Orange
Piltover
Least 5 Mastery
Purple
Silencers
Spin Again
Bearded Champs
Non-Humanoid
Ionia
Masked Champs
Yellow
Undead
Green
Zaun
Targon
Speedsters (Enhanced Movement Speed)
Supports
Shield Bearers
Villains
Elderwood Skins
Pentakill Potentials
AP Only
Skillshot Masters
Animal Like
Red
Festive Skins (Holiday-themed Skins)
First Letter of First Name
Bilgewater
Shape Shifters
Bare Hands (Champions without weapons)
Shadow Isles
Reworked Champs
Tall Champs
Heroes";

/// An ordered, immutable list of category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
}
impl Catalog {
    /// Parses one entry per non-empty line, keeping the order of the text.
    pub fn parse(text: &str) -> Self {
        Self {
            entries: text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::parse(CATEGORY_LIST)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries joined back into a newline-separated block, for embedding in prompts.
    pub fn as_prompt_list(&self) -> String {
        self.entries.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 79);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.entries().first().map(String::as_str), Some("PROJECT Skins"));
        assert_eq!(catalog.entries().last().map(String::as_str), Some("Heroes"));
        assert!(
            catalog
                .entries()
                .iter()
                .all(|e| !e.is_empty() && e.trim() == e)
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let catalog = Catalog::parse("Freljord\n\n   \nAP Only\r\nAD Only\n");
        assert_eq!(catalog.entries(), ["Freljord", "AP Only", "AD Only"]);
    }

    #[test]
    fn test_prompt_list_preserves_order() {
        let catalog = Catalog::parse("Void\nIonia\nZaun");
        assert_eq!(catalog.as_prompt_list(), "Void\nIonia\nZaun");
        assert_eq!(Catalog::builtin().as_prompt_list(), CATEGORY_LIST);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::parse("\n \n");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
