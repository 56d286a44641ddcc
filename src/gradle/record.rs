use uuid::Uuid;

pub const DEFAULT_VERSION: &str = "1.0.0-SNAPSHOT";
pub const DEFAULT_GROUP: &str = "com.topdesk.solution.customer";
pub const DEFAULT_DESCRIPTION: &str = "Tool for customizing icons in the Self Service Desk";
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer Name";
pub const DEFAULT_PROJECT_FULL_NAME: &str = "Project Name";
pub const DEFAULT_INTERNAL_PROJECT_NAME: &str = "customer-name_project-name";
pub const DEFAULT_TAS_VERSION: &str = "5.5.1";
pub const DEFAULT_IS_XFG_PROJECT: &str = "false";
pub const DEFAULT_PROJECT_TYPE: &str =
    "forms,lookandfeel,labels,reports,modifiedcards,xmlimport,addon,other";

/// Project metadata spliced into `build.gradle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradleConfig {
    pub version: String,
    pub group: String,
    pub description: String,
    pub internal_project_name: String,
    pub customer_name: String,
    pub project_full_name: String,
    pub tas_version: String,
    pub is_xfg_project: String,
    pub test_case: String,
    pub customer_reference_number: String,
    pub unique_id: String,
    pub project_type: String,
}

impl GradleConfig {
    /// Seeded defaults with a freshly generated unique id.
    pub fn with_defaults() -> Self {
        Self::with_unique_id(Uuid::new_v4().to_string())
    }

    pub fn with_unique_id(unique_id: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            group: DEFAULT_GROUP.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            internal_project_name: DEFAULT_INTERNAL_PROJECT_NAME.to_string(),
            customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            project_full_name: DEFAULT_PROJECT_FULL_NAME.to_string(),
            tas_version: DEFAULT_TAS_VERSION.to_string(),
            is_xfg_project: DEFAULT_IS_XFG_PROJECT.to_string(),
            test_case: String::new(),
            customer_reference_number: String::new(),
            unique_id: unique_id.into(),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Version => &self.version,
            Field::Group => &self.group,
            Field::Description => &self.description,
            Field::InternalProjectName => &self.internal_project_name,
            Field::CustomerName => &self.customer_name,
            Field::ProjectFullName => &self.project_full_name,
            Field::TasVersion => &self.tas_version,
            Field::IsXfgProject => &self.is_xfg_project,
            Field::TestCase => &self.test_case,
            Field::CustomerReferenceNumber => &self.customer_reference_number,
            Field::UniqueId => &self.unique_id,
            Field::ProjectType => &self.project_type,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Version => &mut self.version,
            Field::Group => &mut self.group,
            Field::Description => &mut self.description,
            Field::InternalProjectName => &mut self.internal_project_name,
            Field::CustomerName => &mut self.customer_name,
            Field::ProjectFullName => &mut self.project_full_name,
            Field::TasVersion => &mut self.tas_version,
            Field::IsXfgProject => &mut self.is_xfg_project,
            Field::TestCase => &mut self.test_case,
            Field::CustomerReferenceNumber => &mut self.customer_reference_number,
            Field::UniqueId => &mut self.unique_id,
            Field::ProjectType => &mut self.project_type,
        };
        *slot = value.into();
    }

    /// `customer-name_project-name` built from the customer and project names.
    pub fn suggested_internal_project_name(&self) -> String {
        format!(
            "{}_{}",
            slugify(&self.customer_name),
            slugify(&self.project_full_name)
        )
    }
}

/// Fields in the order the wizard asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Version,
    Group,
    Description,
    CustomerName,
    ProjectFullName,
    InternalProjectName,
    TasVersion,
    IsXfgProject,
    TestCase,
    CustomerReferenceNumber,
    UniqueId,
    ProjectType,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Version,
        Field::Group,
        Field::Description,
        Field::CustomerName,
        Field::ProjectFullName,
        Field::InternalProjectName,
        Field::TasVersion,
        Field::IsXfgProject,
        Field::TestCase,
        Field::CustomerReferenceNumber,
        Field::UniqueId,
        Field::ProjectType,
    ];

    /// Property name as written in `build.gradle`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Version => "version",
            Field::Group => "group",
            Field::Description => "description",
            Field::InternalProjectName => "internalProjectName",
            Field::CustomerName => "customerName",
            Field::ProjectFullName => "projectFullName",
            Field::TasVersion => "tasVersion",
            Field::IsXfgProject => "isXfgProject",
            Field::TestCase => "testCase",
            Field::CustomerReferenceNumber => "customerReferenceNumber",
            Field::UniqueId => "uniqueId",
            Field::ProjectType => "projectType",
        }
    }

    pub fn label(self) -> String {
        self.key().to_uppercase()
    }

    pub fn help(self) -> String {
        let help = match self {
            Field::Version => t!("gradle.fields.version"),
            Field::Group => t!("gradle.fields.group"),
            Field::Description => t!("gradle.fields.description"),
            Field::InternalProjectName => t!("gradle.fields.internalProjectName"),
            Field::CustomerName => t!("gradle.fields.customerName"),
            Field::ProjectFullName => t!("gradle.fields.projectFullName"),
            Field::TasVersion => t!("gradle.fields.tasVersion"),
            Field::IsXfgProject => t!("gradle.fields.isXfgProject"),
            Field::TestCase => t!("gradle.fields.testCase"),
            Field::CustomerReferenceNumber => t!("gradle.fields.customerReferenceNumber"),
            Field::UniqueId => t!("gradle.fields.uniqueId"),
            Field::ProjectType => t!("gradle.fields.projectType"),
        };
        help.to_string()
    }
}

/// Lowercases and joins words with `-`, dropping anything that is not alphanumeric.
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
