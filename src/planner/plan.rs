//! Planning results and diagnostics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{OrderStatus, OrderStatusUpdate, Tour};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected condition worth surfacing.
    Info,
    /// Something the caller should look at.
    Warning,
}

/// A non-fatal condition observed while planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Diagnostic {
    /// No vehicle has status `available`.
    NoAvailableVehicles,
    /// No pending orders were supplied.
    NoOrders,
    /// Orders that were not pending and therefore not planned.
    SkippedNonPendingOrders {
        /// Skipped orders.
        order_ids: Vec<String>,
    },
    /// A customer position was missing and the fallback was used.
    FallbackCoordinate {
        /// Affected order.
        order_id: String,
        /// Customer without coordinates.
        customer_id: String,
    },
    /// A tour packed in the overflow pass.
    OverCapacityTour {
        /// Affected tour.
        tour_id: String,
        /// Containers loaded.
        load: u32,
        /// Nominal vehicle capacity.
        capacity: u32,
    },
    /// Orders that fit no vehicle even at the relaxed ceiling.
    UnassignedOrders {
        /// Delivery date of the group.
        date: NaiveDate,
        /// Orders left over.
        order_ids: Vec<String>,
    },
    /// 2-opt stopped on its budget; the tour uses the best sequence found.
    ImprovementBudgetExhausted {
        /// Affected tour.
        tour_id: String,
        /// Passes performed.
        passes: usize,
    },
    /// Estimated duration is above the configured maximum.
    TourExceedsMaxDuration {
        /// Affected tour.
        tour_id: String,
        /// Estimated hours.
        estimated_hours: f64,
        /// Allowed hours.
        max_hours: f64,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::SkippedNonPendingOrders { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

/// An order that was not placed on any tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedOrder {
    /// Order ID.
    pub order_id: String,
    /// Delivery date.
    pub date: NaiveDate,
    /// Containers that did not fit.
    pub container_count: u32,
}

/// Output of a planning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourPlan {
    tours: Vec<Tour>,
    unassigned: Vec<UnassignedOrder>,
    diagnostics: Vec<Diagnostic>,
}

impl TourPlan {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_tour(&mut self, tour: Tour) {
        self.tours.push(tour);
    }

    pub(crate) fn push_unassigned(&mut self, order: UnassignedOrder) {
        self.unassigned.push(order);
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Generated tours, grouped by date in ascending order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Tours for one delivery date.
    pub fn tours_on(&self, date: NaiveDate) -> impl Iterator<Item = &Tour> {
        self.tours.iter().filter(move |t| t.date() == date)
    }

    /// Orders that fit no vehicle.
    pub fn unassigned(&self) -> &[UnassignedOrder] {
        &self.unassigned
    }

    /// Conditions observed while planning.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if no tour was generated.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Total distance over all tours in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.tours.iter().map(Tour::total_distance).sum()
    }

    /// Updates marking every planned order as assigned.
    pub fn status_updates(&self) -> Vec<OrderStatusUpdate> {
        self.tours
            .iter()
            .flat_map(|t| t.updates(OrderStatus::Assigned))
            .collect()
    }

    /// Splits the plan into its parts.
    pub fn into_parts(self) -> (Vec<Tour>, Vec<UnassignedOrder>, Vec<Diagnostic>) {
        (self.tours, self.unassigned, self.diagnostics)
    }
}
