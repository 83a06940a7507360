//! `.gitignore` templates from the public GitHub template index

use crate::error::{Result, VtesError};
use std::fs;
use std::path::Path;
use tracing::info;

/// Template names offered by the selection menu.
pub const TEMPLATES: &[&str] = &[
    "AL",
    "Actionscript",
    "Ada",
    "Agda",
    "Android",
    "AppEngine",
    "AppceleratorTitanium",
    "ArchLinuxPackages",
    "Autotools",
    "Ballerina",
    "C++",
    "C",
    "CFWheels",
    "CMake",
    "CUDA",
    "CakePHP",
    "ChefCookbook",
    "Clojure",
    "CodeIgniter",
    "CommonLisp",
    "Composer",
    "Concrete5",
    "Coq",
    "CraftCMS",
    "D",
    "DM",
    "Dart",
    "Delphi",
    "Drupal",
    "EPiServer",
    "Eagle",
    "Elisp",
    "Elixir",
    "Elm",
    "Erlang",
    "ExpressionEngine",
    "ExtJs",
    "Fancy",
    "Finale",
    "FlaxEngine",
    "ForceDotCom",
    "Fortran",
    "FuelPHP",
    "GWT",
    "Gcov",
    "GitBook",
    "GitHubPages",
    "Go",
    "Godot",
    "Gradle",
    "Grails",
    "Haskell",
    "IAR",
    "IGORPro",
    "Idris",
    "JBoss",
    "JENKINS_HOME",
    "Java",
    "Jekyll",
    "Joomla",
    "Julia",
    "KiCad",
    "Kohana",
    "Kotlin",
    "LabVIEW",
    "Laravel",
    "Leiningen",
    "LemonStand",
    "Lilypond",
    "Lithium",
    "Lua",
    "Magento",
    "Maven",
    "Mercury",
    "MetaProgrammingSystem",
    "Nanoc",
    "Nim",
    "Node",
    "OCaml",
    "Objective-C",
    "Opa",
    "OpenCart",
    "OracleForms",
    "Packer",
    "Perl",
    "Phalcon",
    "PlayFramework",
    "Plone",
    "Prestashop",
    "Processing",
    "PureScript",
    "Python",
    "Qooxdoo",
    "Qt",
    "R",
    "ROS",
    "Racket",
    "Rails",
    "Raku",
    "RhodesRhomobile",
    "Ruby",
    "Rust",
    "SCons",
    "Sass",
    "Scala",
    "Scheme",
    "Scrivener",
    "Sdcc",
    "SeamGen",
    "SketchUp",
    "Smalltalk",
    "Stella",
    "SugarCRM",
    "Swift",
    "Symfony",
    "SymphonyCMS",
    "TeX",
    "Terraform",
    "Textpattern",
    "TurboGears2",
    "TwinCAT3",
    "Typo3",
    "Unity",
    "UnrealEngine",
    "VVVV",
    "VisualStudio",
    "Waf",
    "WordPress",
    "Xojo",
    "Yeoman",
    "Yii",
    "ZendFramework",
    "Zephir",
];

/// URL of the raw template `name` under `index_url`.
pub fn template_url(index_url: &str, name: &str) -> String {
    format!("{}/{}.gitignore", index_url.trim_end_matches('/'), name)
}

/// Download template `name` and write it verbatim to `dest`.
///
/// Transport failures and non-success statuses are errors.
pub fn fetch_template(index_url: &str, name: &str, dest: &Path) -> Result<()> {
    let url = template_url(index_url, name);

    let body = reqwest::blocking::get(&url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| VtesError::template_fetch(name, e))?;

    fs::write(dest, body).map_err(|e| VtesError::template_fetch(name, e))?;
    info!(template = name, path = %dest.display(), "saved .gitignore template");
    Ok(())
}
