//! Feed renderer
//!
//! Renders the widget to HTML: the full page and the fragments served on
//! their own (progress, donor feed, supplies, comment wall).

use crate::domain::entities::{FeedEntry, ProgressSnapshot, Supply, Thought};

/// Everything the page shows at one instant
pub struct Page<'a> {
    pub progress: &'a ProgressSnapshot,
    pub feed: &'a [FeedEntry],
    pub supplies: &'a [Supply],
    pub thoughts: &'a [Thought],
}

/// Render the complete widget page
pub fn render_page(page: &Page<'_>) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n");
    buf.push_str("<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str("<title>Fundraiser</title>\n");
    buf.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n");
    buf.push_str("</head>\n<body>\n");

    // Progress
    buf.push_str("<section id=\"progress\">\n");
    buf.push_str(&render_progress(page.progress));
    buf.push_str("</section>\n");

    // Donation form and live feed
    buf.push_str("<section id=\"payment\">\n");
    buf.push_str("<h2>Donate</h2>\n");
    buf.push_str(&render_donation_form());
    buf.push_str("</section>\n");

    buf.push_str("<section id=\"donors\">\n");
    buf.push_str("<h2>Recent donors</h2>\n");
    buf.push_str(&render_feed(page.feed));
    buf.push_str("</section>\n");

    // Supplies gallery
    buf.push_str("<section id=\"supplies\">\n");
    buf.push_str("<h2>Supplies distributed</h2>\n");
    buf.push_str(&render_supplies(page.supplies));
    buf.push_str("</section>\n");

    // Comment wall
    buf.push_str("<section id=\"thoughts\">\n");
    buf.push_str("<h2>Thoughts &amp; opinions</h2>\n");
    buf.push_str(&render_thought_form());
    buf.push_str(&render_thoughts(page.thoughts));
    buf.push_str("</section>\n");

    buf.push_str("</body>\n</html>\n");

    buf
}

/// Render the progress bar and its labels
pub fn render_progress(progress: &ProgressSnapshot) -> String {
    let mut buf = String::new();
    let target = progress.target_cents / 100;

    buf.push_str("<div class=\"progress-track\">\n");
    buf.push_str(&format!(
        "<div id=\"progress-bar\" class=\"progress-fill\" style=\"width: {}%\" data-value=\"{}\">${} raised of ${}</div>\n",
        progress.percent,
        progress.displayed_raised,
        format_thousands(progress.displayed_raised),
        format_thousands(target)
    ));
    buf.push_str("</div>\n");

    buf.push_str("<ul class=\"progress-stats\">\n");
    buf.push_str(&format!(
        "<li>Donors: <span id=\"total-donors\">{}</span></li>\n",
        format_thousands(progress.donor_count)
    ));
    buf.push_str(&format!(
        "<li>Raised: $<span id=\"total-raised\">{}</span></li>\n",
        format_thousands(progress.raised_cents / 100)
    ));
    buf.push_str(&format!(
        "<li>Progress: <span id=\"progress-percent\">{:.1}%</span></li>\n",
        progress.percent
    ));
    buf.push_str("</ul>\n");

    buf
}

/// Render the donor feed, newest first
pub fn render_feed(entries: &[FeedEntry]) -> String {
    let mut buf = String::new();

    buf.push_str("<div id=\"donor-feed-alt\">\n");
    if entries.is_empty() {
        buf.push_str("<p class=\"empty\">Be the first to donate.</p>\n");
    }
    for entry in entries {
        buf.push_str(&render_donor_card(entry));
    }
    buf.push_str("</div>\n");

    buf
}

/// Render a single donor card
pub fn render_donor_card(entry: &FeedEntry) -> String {
    let donation = &entry.donation;
    let message = donation
        .message
        .as_ref()
        .map(|m| format!("<div class=\"donor-message\">{}</div>", escape_html(m)))
        .unwrap_or_default();

    format!(
        "<div class=\"donor-card\">\
         <div class=\"donor-left\">\
         <div class=\"donor-avatar\">{}</div>\
         <div class=\"donor-info\">\
         <h4>{}</h4>\
         <small data-time=\"{}\">{}</small>\
         {}\
         </div>\
         </div>\
         <div class=\"donor-amount\">{}</div>\
         </div>\n",
        escape_html(&initials(&donation.donor_name)),
        escape_html(&donation.donor_name),
        donation.created_at.timestamp_millis(),
        entry.age_label,
        message,
        format_currency(donation.amount_cents)
    )
}

/// Render the supplies grid
pub fn render_supplies(supplies: &[Supply]) -> String {
    let mut buf = String::new();

    buf.push_str("<div id=\"supply-grid\">\n");
    for supply in supplies {
        buf.push_str(&format!(
            "<div class=\"grid-item\"><img src=\"{}\" alt=\"Supply image\"><p>{}</p></div>\n",
            escape_html(&supply.image),
            escape_html(&supply.description)
        ));
    }
    buf.push_str("</div>\n");

    buf
}

/// Render the comment wall, newest first
pub fn render_thoughts(thoughts: &[Thought]) -> String {
    let mut buf = String::new();

    buf.push_str("<div id=\"thoughts-feed\">\n");
    for thought in thoughts {
        buf.push_str(&format!(
            "<div class=\"thought-card\">{}</div>\n",
            escape_html(&thought.message)
        ));
    }
    buf.push_str("</div>\n");

    buf
}

fn render_donation_form() -> String {
    let mut buf = String::new();

    buf.push_str("<form id=\"simulate-donor-form\" method=\"post\" action=\"/donate\">\n");
    buf.push_str("<input id=\"sim-name\" name=\"name\" placeholder=\"Your name\">\n");
    buf.push_str("<input id=\"sim-amount\" name=\"amount\" placeholder=\"Amount\" inputmode=\"decimal\">\n");
    buf.push_str("<input id=\"sim-message\" name=\"message\" placeholder=\"Message (optional)\">\n");
    buf.push_str("<button type=\"submit\">Donate</button>\n");
    buf.push_str("</form>\n");

    buf
}

fn render_thought_form() -> String {
    let mut buf = String::new();

    buf.push_str("<form id=\"thoughts-form\" method=\"post\" action=\"/comment\">\n");
    buf.push_str("<textarea id=\"thought-message\" name=\"message\" placeholder=\"Share your thoughts\"></textarea>\n");
    buf.push_str("<button type=\"submit\">Post</button>\n");
    buf.push_str("</form>\n");

    buf
}

/// Avatar initials: first letter of each word, uppercased
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "NA".to_string()
    } else {
        initials
    }
}

/// Group digits in threes: 1850500 -> "1,850,500"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Card amount with two decimals: 10000 cents -> "$100.00"
pub fn format_currency(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Escape text for HTML element content and quoted attributes
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_campaign, test_donation};

    fn entry(name: &str, amount_cents: u64, message: Option<&str>) -> FeedEntry {
        let mut donation = test_donation(name, amount_cents);
        donation.message = message.map(str::to_string);
        FeedEntry::new(donation)
    }

    // ===== helpers =====

    #[test]
    fn initials_from_words() {
        assert_eq!(initials("Test"), "T");
        assert_eq!(initials("sophia k."), "SK");
        assert_eq!(initials("  Mary   Jane  Watson "), "MJW");
        assert_eq!(initials(""), "NA");
        assert_eq!(initials("   "), "NA");
    }

    #[test]
    fn format_thousands_groups() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(48_267), "48,267");
        assert_eq!(format_thousands(1_850_600), "1,850,600");
        assert_eq!(format_thousands(3_000_000), "3,000,000");
    }

    #[test]
    fn format_currency_two_decimals() {
        assert_eq!(format_currency(10_000), "$100.00");
        assert_eq!(format_currency(1_250), "$12.50");
        assert_eq!(format_currency(7), "$0.07");
    }

    #[test]
    fn escape_html_specials() {
        assert_eq!(
            escape_html("<script>alert(\"x\") & 'y'</script>"),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    // ===== render_progress =====

    #[test]
    fn render_progress_labels() {
        let mut state = test_campaign();
        state.record_donation(10_000);
        let snapshot = state.snapshot(1_850_600);

        let result = render_progress(&snapshot);

        assert!(result.contains("$1,850,600 raised of $3,000,000"));
        assert!(result.contains("<span id=\"total-donors\">48,267</span>"));
        assert!(result.contains("<span id=\"total-raised\">1,850,600</span>"));
        assert!(result.contains("<span id=\"progress-percent\">61.7%</span>"));
        assert!(result.contains("style=\"width: 61.68"));
    }

    #[test]
    fn render_progress_uses_displayed_value_for_bar_label() {
        let snapshot = test_campaign().snapshot(12_345);

        let result = render_progress(&snapshot);

        assert!(result.contains("$12,345 raised of $3,000,000"));
        assert!(result.contains("data-value=\"12345\""));
    }

    // ===== render_feed =====

    #[test]
    fn render_feed_empty() {
        let result = render_feed(&[]);

        assert!(result.contains("donor-feed-alt"));
        assert!(result.contains("Be the first to donate."));
    }

    #[test]
    fn render_donor_card_fields() {
        let result = render_donor_card(&entry("Test", 10_000, Some("Keep going!")));

        assert!(result.contains("<div class=\"donor-avatar\">T</div>"));
        assert!(result.contains("<h4>Test</h4>"));
        assert!(result.contains(">just now</small>"));
        assert!(result.contains("<div class=\"donor-message\">Keep going!</div>"));
        assert!(result.contains("<div class=\"donor-amount\">$100.00</div>"));
    }

    #[test]
    fn render_donor_card_without_message() {
        let result = render_donor_card(&entry("Liam B.", 2_500, None));

        assert!(!result.contains("donor-message"));
        assert!(result.contains("LB"));
        assert!(result.contains("$25.00"));
    }

    #[test]
    fn render_donor_card_escapes_visitor_text() {
        let result = render_donor_card(&entry("<b>Eve</b>", 100, Some("<img src=x>")));

        assert!(!result.contains("<b>Eve</b>"));
        assert!(result.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(result.contains("&lt;img src=x&gt;"));
    }

    #[test]
    fn render_feed_keeps_order() {
        let entries = vec![entry("Newest", 100, None), entry("Oldest", 100, None)];

        let result = render_feed(&entries);

        let newest = result.find("Newest").unwrap();
        let oldest = result.find("Oldest").unwrap();
        assert!(newest < oldest);
        assert!(!result.contains("Be the first"));
    }

    // ===== supplies / thoughts =====

    #[test]
    fn render_supplies_grid() {
        let result = render_supplies(&Supply::gallery());

        assert_eq!(result.matches("class=\"grid-item\"").count(), 6);
        assert!(result.contains("<img src=\"images/med.webp\""));
    }

    #[test]
    fn render_thoughts_escapes() {
        let thoughts = vec![Thought::from_message("Love & <3").unwrap()];

        let result = render_thoughts(&thoughts);

        assert!(result.contains("<div class=\"thought-card\">Love &amp; &lt;3</div>"));
    }

    // ===== render_page =====

    #[test]
    fn render_page_has_every_section() {
        let progress = test_campaign().snapshot(0);
        let feed = vec![entry("Test", 10_000, None)];
        let supplies = Supply::gallery();
        let thoughts = vec![Thought::from_message("Stay strong").unwrap()];

        let result = render_page(&Page {
            progress: &progress,
            feed: &feed,
            supplies: &supplies,
            thoughts: &thoughts,
        });

        assert!(result.starts_with("<!DOCTYPE html>"));
        assert!(result.contains("id=\"progress-bar\""));
        assert!(result.contains("id=\"simulate-donor-form\""));
        assert!(result.contains("action=\"/donate\""));
        assert!(result.contains("id=\"donor-feed-alt\""));
        assert!(result.contains("id=\"supply-grid\""));
        assert!(result.contains("id=\"thoughts-feed\""));
        assert!(result.contains("Stay strong"));
        assert!(result.contains("$100.00"));
    }
}
