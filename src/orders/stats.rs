use crate::model::ProcessedOrder;

/// Summary figures shown above the backend order table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderStats {
    pub total: usize,
    pub confirmed: usize,
    /// Mean processing time over orders that have one.
    pub average_processing: Option<f64>,
    pub fastest: Option<f64>,
}

impl OrderStats {
    pub fn from_orders(orders: &[ProcessedOrder]) -> Self {
        let times: Vec<f64> = orders.iter().filter_map(|o| o.processing_time).collect();
        let average_processing = if times.is_empty() {
            None
        } else {
            Some(times.iter().sum::<f64>() / times.len() as f64)
        };
        let fastest = times.iter().copied().reduce(f64::min);
        Self {
            total: orders.len(),
            confirmed: orders.iter().filter(|o| o.order.is_confirmed()).count(),
            average_processing,
            fastest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RemoteOrder;

    fn processed(status: &str, time: Option<f64>) -> ProcessedOrder {
        ProcessedOrder {
            order: RemoteOrder {
                status: Some(status.to_string()),
                ..Default::default()
            },
            processing_time: time,
        }
    }

    #[test]
    fn test_stats() {
        let orders = vec![
            processed("CONFIRMED", Some(2.0)),
            processed("CONFIRMED", Some(0.5)),
            processed("PENDING", None),
        ];
        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.average_processing, Some(1.25));
        assert_eq!(stats.fastest, Some(0.5));
    }

    #[test]
    fn test_stats_without_times() {
        let stats = OrderStats::from_orders(&[processed("PENDING", None)]);
        assert_eq!(stats.average_processing, None);
        assert_eq!(stats.fastest, None);
        assert_eq!(OrderStats::from_orders(&[]), OrderStats::default());
    }
}
