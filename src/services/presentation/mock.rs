//! Mock Plans
//!
//! Canned plan results substituted whenever the planner endpoint cannot be
//! reached or answers unsuccessfully.

use serde_json::{json, Value};
use task_planner_core::{AgentMode, PlanResult};

use super::transform::{transform_plan_result, Step};
use crate::utils::error::AppResult;

/// Source of the canned payload for a mode.
pub type MockSource = fn(AgentMode) -> Value;

/// The canned payload for a mode, in the wire shape of a plan result.
pub fn mock_payload(mode: AgentMode) -> Value {
    match mode {
        AgentMode::Normal => json!({
            "code": [
                "from flask import Flask, jsonify, request",
                "from flask_sqlalchemy import SQLAlchemy",
                "app = Flask(__name__)",
                "app.config['SQLALCHEMY_DATABASE_URI'] = 'sqlite:///ecommerce.db'",
                "db = SQLAlchemy(app)",
                "",
                "class Vendor(db.Model):",
                "    id = db.Column(db.Integer, primary_key=True)",
                "    name = db.Column(db.String(100), nullable=False)",
                "",
                "if __name__ == '__main__':",
                "    app.run(debug=True)"
            ]
        }),
        AgentMode::Planner => json!({
            "plan": [
                "Step 1: Plan the database schema for the ecommerce application, including tables for products, vendors, customers, and orders",
                "Step 2: Design the frontend of the application, including user registration, login, product browsing, and checkout functionality",
                "Step 3: Implement the backend of the application, including user authentication, product management, and order processing",
                "Step 4: Develop the multi-vendor system, allowing vendors to create and manage their own products and inventory",
                "Step 5: Implement payment gateway integration for secure transactions",
                "Step 6: Test and deploy the application, ensuring scalability and security"
            ],
            "code": [
                "# Import necessary libraries and frameworks",
                "from flask import Flask, request, jsonify",
                "from flask_sqlalchemy import SQLAlchemy",
                "from flask_login import LoginManager, UserMixin, login_user, logout_user, login_required",
                "",
                "# Create the Flask application and configure the database",
                "app = Flask(__name__)",
                "app.config['SQLALCHEMY_DATABASE_URI'] = 'sqlite:///ecommerce.db'",
                "db = SQLAlchemy(app)",
                "",
                "# Define the database models for products, vendors, customers, and orders",
                "class Product(db.Model):",
                "    id = db.Column(db.Integer, primary_key=True)",
                "    name = db.Column(db.String(100), nullable=False)",
                "    price = db.Column(db.Float, nullable=False)",
                "    vendor_id = db.Column(db.Integer, db.ForeignKey('vendor.id'))",
                "",
                "class Vendor(db.Model):",
                "    id = db.Column(db.Integer, primary_key=True)",
                "    name = db.Column(db.String(100), nullable=False)",
                "    products = db.relationship('Product', backref='vendor', lazy=True)",
                "",
                "if __name__ == '__main__':",
                "    app.run(debug=True)"
            ]
        }),
    }
}

/// Decode the canned payload from `source` and turn it into steps.
pub fn build_mock_plan(mode: AgentMode, source: MockSource) -> AppResult<Vec<Step>> {
    let result = PlanResult::from_value(source(mode))?;
    Ok(transform_plan_result(&result, mode))
}
