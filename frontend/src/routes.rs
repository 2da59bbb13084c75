//! In-app navigation targets for the admin dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Transactions,
    Stores,
    Users,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Dashboard,
        Route::Transactions,
        Route::Stores,
        Route::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Transactions => "Transaksi",
            Route::Stores => "Toko",
            Route::Users => "User",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Dashboard => "📊",
            Route::Transactions => "🧾",
            Route::Stores => "🏬",
            Route::Users => "👥",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_distinct_title() {
        let titles: Vec<&str> = Route::ALL.iter().map(|r| r.title()).collect();
        let mut unique = titles.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(titles.len(), unique.len());
    }
}
