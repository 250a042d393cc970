#![allow(non_snake_case)]

use visiontrack::client;

fn main() {
    dioxus::launch(client::App);
}
