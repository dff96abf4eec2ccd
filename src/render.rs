//! Plain-text rendering of a dashboard frame

use walletledger_core::{DashboardView, PageLink, SortColumn, SortDirection, Transaction, ViewStatus};
use walletledger_utils::{format_change, format_currency, format_date, format_number, format_signed_currency};

/// Column-aligned text table
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    fn new(headers: Vec<String>) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.col_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    fn render_row(&self, row: &[String]) -> String {
        row.iter()
            .zip(&self.col_widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }

    fn render(&self) -> String {
        let mut output = self.render_row(&self.headers);
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');
        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }
        output
    }
}

fn header_label(column: SortColumn, view: &DashboardView<'_>) -> String {
    if view.sort.column != column {
        return column.label().to_string();
    }
    let arrow = match view.sort.direction {
        SortDirection::Ascending => '^',
        SortDirection::Descending => 'v',
    };
    format!("{} {}", column.label(), arrow)
}

fn table_row(tx: &Transaction) -> Vec<String> {
    vec![
        format_date(tx.date()),
        tx.remark().to_string(),
        format_signed_currency(tx.amount(), tx.currency()),
        tx.currency().to_string(),
        tx.transaction_type().to_string(),
    ]
}

fn render_links(links: &[PageLink], current_page: usize) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page(page) if *page == current_page => format!("[{}]", page),
            PageLink::Page(page) => page.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render summary cards, filter counts and the visible table page
pub fn render_view(view: &DashboardView<'_>, currency: &str) -> String {
    let summary = view.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "Total Balance: {:<14} {}\n",
        format_signed_currency(summary.total_balance, currency),
        format_change(summary.balance_change)
    ));
    out.push_str(&format!(
        "Total Credits: {:<14} {}\n",
        format_currency(summary.total_credits, currency),
        format_change(summary.credits_change)
    ));
    out.push_str(&format!(
        "Total Debits:  {:<14} {}\n",
        format_currency(summary.total_debits, currency),
        format_change(summary.debits_change)
    ));
    out.push_str(&format!(
        "Transactions:  {:<14} {}\n\n",
        format_number(summary.transaction_count.into()),
        format_change(summary.transaction_change)
    ));

    out.push_str(&format!(
        "All ({})  Credit ({})  Debit ({})    filter: {}",
        view.type_counts.all, view.type_counts.credit, view.type_counts.debit, view.filter.type_filter
    ));
    if !view.filter.search.trim().is_empty() {
        out.push_str(&format!("  search: \"{}\"", view.filter.search.trim()));
    }
    out.push_str("\n\n");

    let table = &view.table;
    if let ViewStatus::Empty { filters_active } = table.status {
        out.push_str("No transactions found\n");
        if filters_active {
            out.push_str("Try adjusting your search or filter criteria.\n");
        } else {
            out.push_str("There are no transactions to show yet.\n");
        }
        return out;
    }

    let mut grid = Table::new(SortColumn::ALL.iter().map(|c| header_label(*c, view)).collect());
    for tx in &table.rows {
        grid.add_row(table_row(tx));
    }
    out.push_str(&grid.render());
    out.push('\n');

    out.push_str(&table.page.showing_label());
    out.push_str(&format!("    {} per page\n", table.page.page_size));
    out.push_str(&format!(
        "Page {} of {}: {}\n",
        table.page.current_page,
        table.page.total_pages,
        render_links(&table.page_links, table.page.current_page)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use walletledger_config::Config;
    use walletledger_core::{Dashboard, TypeFilter};

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(vec!["Date".to_string(), "Remark".to_string()]);
        table.add_row(vec!["10/01/2023".to_string(), "Salary".to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Date       | Remark");
        assert_eq!(lines[1], "-----------+-------");
        assert_eq!(lines[2], "10/01/2023 | Salary");
    }

    #[test]
    fn test_render_links_marks_current() {
        let links = vec![PageLink::Page(1), PageLink::Ellipsis, PageLink::Page(4), PageLink::Page(15)];
        assert_eq!(render_links(&links, 4), "1 ... [4] 15");
    }

    #[test]
    fn test_render_fixture_view() {
        let dashboard = Dashboard::from_config(&Config::default()).unwrap();
        let text = render_view(&dashboard.view(), "USD");
        assert!(text.contains("Total Balance: $3,435"));
        assert!(text.contains("All (150)  Credit (12)  Debit (138)"));
        assert!(text.contains("Date ^"));
        assert!(text.contains("10/01/2023 | Salary"));
        assert!(text.contains("Showing 1-10 of 150 transactions"));
        assert!(text.contains("Page 1 of 15: [1] 2 3 4 5 ... 15"));
    }

    #[test]
    fn test_render_empty_state() {
        let mut dashboard = Dashboard::from_config(&Config::default()).unwrap();
        dashboard.set_type_filter(TypeFilter::Credit);
        dashboard.set_search("groceries");
        let text = render_view(&dashboard.view(), "USD");
        assert!(text.contains("No transactions found"));
        assert!(text.contains("Try adjusting your search or filter criteria."));
        assert!(!text.contains("Showing"));
    }
}
