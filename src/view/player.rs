use crate::config::RenderConfig;
use crate::model::{Element, Node};

/// Avatar image for a player, served by the avatar host.
pub fn avatar_url(config: &RenderConfig, player: &str) -> String {
    format!(
        "{}{}/{}.png",
        config.avatar_base,
        urlencoding::encode(player),
        config.avatar_size
    )
}

/// Identity unit for one player: optional `(time)`, avatar, then name.
///
/// With `compact` set the name is hidden on narrow viewports.
pub fn player_badge(config: &RenderConfig, name: &str, time: Option<&str>, compact: bool) -> Node {
    let time = time.map(|t| {
        Element::new("span")
            .class("text-monospace")
            .text(format!("({t})"))
            .into_node()
    });
    let label = Element::new("p")
        .class(if compact { "d-none d-lg-inline" } else { "" })
        .text(name);

    Element::new("span")
        .class("player")
        .maybe_child(time)
        .text(" ")
        .child(
            Element::new("img")
                .attr("src", avatar_url(config, name))
                .attr("alt", name),
        )
        .text(" ")
        .child(label)
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url() {
        let config = RenderConfig::default();
        assert_eq!(
            avatar_url(&config, "pj"),
            "http://cravatar.eu/avatar/pj/15.png"
        );

        let config = RenderConfig {
            avatar_size: 32,
            ..RenderConfig::default()
        };
        assert_eq!(
            avatar_url(&config, "pj"),
            "http://cravatar.eu/avatar/pj/32.png"
        );
    }

    #[test]
    fn test_avatar_url_encodes_name() {
        let config = RenderConfig::default();
        assert_eq!(
            avatar_url(&config, "big bob/?"),
            "http://cravatar.eu/avatar/big%20bob%2F%3F/15.png"
        );
    }

    #[test]
    fn test_badge_with_time_compact() {
        let badge = player_badge(&RenderConfig::default(), "pj", Some("01:20"), true);
        let root = badge.as_element().unwrap();
        assert!(root.has_class("player"));

        let children = root.child_elements().collect::<Vec<_>>();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].tag, "span");
        assert_eq!(children[0].children, vec![Node::Text("(01:20)".to_string())]);
        assert_eq!(
            children[1].get_attr("src"),
            Some("http://cravatar.eu/avatar/pj/15.png")
        );
        assert_eq!(children[2].tag, "p");
        assert!(children[2].has_class("d-none"));
        assert!(children[2].has_class("d-lg-inline"));
        assert_eq!(badge.text_content(), "(01:20)  pj");
    }

    #[test]
    fn test_badge_without_time_shows_name() {
        let badge = player_badge(&RenderConfig::default(), "qx", None, false);
        let root = badge.as_element().unwrap();

        let children = root.child_elements().collect::<Vec<_>>();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag, "img");
        assert_eq!(children[1].tag, "p");
        assert_eq!(children[1].get_attr("class"), None);
        assert_eq!(badge.text_content().trim(), "qx");
    }
}
