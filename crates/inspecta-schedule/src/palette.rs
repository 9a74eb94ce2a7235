use inspecta_core::types::ScheduleKind;

/// Fixed colours per recurrence kind, shared by timeline events and calendar dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindColors {
    pub color: &'static str,
    pub selected_dot_color: &'static str,
}

const DAILY: KindColors = KindColors {
    color: "#2E7D32",
    selected_dot_color: "#A5D6A7",
};

const WEEKLY: KindColors = KindColors {
    color: "#1565C0",
    selected_dot_color: "#90CAF9",
};

const CUSTOM: KindColors = KindColors {
    color: "#EF6C00",
    selected_dot_color: "#FFCC80",
};

#[must_use]
pub const fn colors(kind: ScheduleKind) -> KindColors {
    match kind {
        ScheduleKind::Daily => DAILY,
        ScheduleKind::Weekly => WEEKLY,
        ScheduleKind::Custom => CUSTOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_a_distinct_color() {
        let daily = colors(ScheduleKind::Daily).color;
        let weekly = colors(ScheduleKind::Weekly).color;
        let custom = colors(ScheduleKind::Custom).color;
        assert_ne!(daily, weekly);
        assert_ne!(weekly, custom);
        assert_ne!(daily, custom);
    }
}
